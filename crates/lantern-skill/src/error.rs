//! Error types for the conversational layer.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for skill operations.
pub type SkillResult<T> = Result<T, SkillError>;

/// Errors reported by the session manager.
#[derive(Debug, Error)]
pub enum SkillError {
    /// A required setting is not configured.
    #[error("missing setting '{0}'; please configure it before playing")]
    ConfigurationMissing(&'static str),

    /// The requested game file does not exist.
    #[error("game file not found ({})", .0.display())]
    GameFileNotFound(PathBuf),

    /// The game name points outside the game directory.
    #[error("invalid game name '{0}'; give a file name inside the game directory")]
    InvalidGameName(String),

    /// A game is already running.
    #[error("a game is already running; quit it first")]
    SessionActive,

    /// No game is running.
    #[error("no game is running")]
    NoActiveSession,

    /// The settings file could not be read or parsed.
    #[error("invalid settings: {0}")]
    Settings(String),

    /// Interpreter bridge error.
    #[error("{0}")]
    Bridge(#[from] lantern_bridge::BridgeError),
}

impl From<serde_json::Error> for SkillError {
    fn from(err: serde_json::Error) -> Self {
        Self::Settings(err.to_string())
    }
}
