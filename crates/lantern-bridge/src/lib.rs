//! Subprocess bridge to interactive fiction interpreters.
//!
//! Spawns an interpreter, writes player commands to its stdin one line at a
//! time, and collects its stdout until the interpreter prints its `>` prompt.
//! The protocol has no message framing, so end of turn is detected from the
//! prompt suffix, end of stream, or a timeout.

/// Stdin/stdout ("cheap") interpreter bridge.
pub mod cheap;
/// Player input commands.
pub mod command;
/// Error types for the bridge.
pub mod error;
/// Interpreter process spawning and teardown.
pub mod process;
/// Background reader for interpreter output.
pub mod pump;
/// The game-state interface and window model.
pub mod state;

#[cfg(test)]
mod testing;

pub use cheap::{CheapGameState, PROMPT_MARKER};
pub use command::{Command, InputKind};
pub use error::{BridgeError, BridgeResult};
pub use process::{DEFAULT_TIMEOUT, ProcessConfig, ProcessSession};
pub use state::{GameState, SessionState, Windows};
