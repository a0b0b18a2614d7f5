//! Error types for the interpreter bridge.

use std::time::Duration;

use thiserror::Error;

use crate::command::InputKind;

/// Result type for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors that can occur while talking to an interpreter.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The bridge cannot deliver this kind of input.
    #[error("unsupported input kind: {0} (only line input is supported)")]
    UnsupportedInputKind(InputKind),

    /// The interpreter did not show its prompt before the deadline.
    #[error("timed out awaiting output after {timeout:?} ({received} bytes received)")]
    OutputTimeout {
        /// The configured turn timeout.
        timeout: Duration,
        /// Bytes accumulated before giving up.
        received: usize,
    },

    /// The interpreter produced bytes that are not valid UTF-8.
    #[error("interpreter output is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// The session has not been initialized yet.
    #[error("session is not initialized")]
    NotReady,

    /// The session has been closed.
    #[error("session is closed")]
    Closed,

    /// The interpreter could not be started.
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        /// The executable that was launched.
        program: String,
        /// The underlying OS error.
        source: std::io::Error,
    },

    /// A standard stream of the child was not captured.
    #[error("interpreter {0} is not piped")]
    MissingPipe(&'static str),

    /// Reading from or writing to the interpreter failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
