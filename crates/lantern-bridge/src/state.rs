//! The interface every interpreter bridge implements.

use crate::command::Command;
use crate::error::BridgeResult;

/// Lifecycle of a bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, handshake not yet performed.
    Uninitialized,
    /// Accepting commands.
    Ready,
    /// Streams released; every further call fails.
    Closed,
}

/// The last rendered content of each interpreter window.
///
/// Exactly one of each window is tracked. A window the interpreter never
/// draws into stays an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Windows {
    /// Main transcript lines.
    pub story: Vec<String>,
    /// Status bar lines.
    pub status: Vec<String>,
    /// Graphics window lines.
    pub graphics: Vec<String>,
}

/// A connection to a running interpreter.
///
/// Implementations wrap one interpreter protocol. The stdin/stdout bridge
/// is [`CheapGameState`](crate::CheapGameState); richer protocols (a
/// windowed terminal, a framed remote protocol) can implement the same
/// three operations.
pub trait GameState {
    /// Perform the interpreter specific startup handshake.
    ///
    /// Must be called once before any input is sent.
    fn initialize(&mut self) -> BridgeResult<()>;

    /// Deliver one command to the interpreter.
    fn send_input(&mut self, cmd: &Command) -> BridgeResult<()>;

    /// Collect the interpreter's reply to the current turn.
    fn receive_output(&mut self) -> BridgeResult<String>;

    /// Current window contents.
    fn windows(&self) -> &Windows;

    /// Current lifecycle state.
    fn state(&self) -> SessionState;
}
