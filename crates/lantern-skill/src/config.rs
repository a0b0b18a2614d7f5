//! Configuration for interactive fiction sessions.

use std::path::PathBuf;
use std::time::Duration;

use lantern_bridge::DEFAULT_TIMEOUT;

use crate::settings::{SECTION, Settings};

/// Settings key for the interpreter executable.
pub const INTERPRETER_KEY: &str = "zvm_path";
/// Settings key for the directory holding game files.
pub const GAME_DIRECTORY_KEY: &str = "game_directory";

/// Configuration for starting games.
#[derive(Debug, Clone)]
pub struct SkillConfig {
    /// Interpreter executable.
    pub interpreter: Option<PathBuf>,
    /// Directory game file names are resolved against.
    pub game_directory: Option<PathBuf>,
    /// Turn timeout.
    pub timeout: Duration,
    /// Echo interpreter output lines to stdout.
    pub verbose: bool,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            interpreter: None,
            game_directory: None,
            timeout: DEFAULT_TIMEOUT,
            verbose: false,
        }
    }
}

impl SkillConfig {
    /// Read interpreter and game directory from the `interactive fiction`
    /// section.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            interpreter: settings.get(INTERPRETER_KEY, SECTION).map(PathBuf::from),
            game_directory: settings.get(GAME_DIRECTORY_KEY, SECTION).map(PathBuf::from),
            ..Self::default()
        }
    }

    /// Set the interpreter executable.
    pub fn with_interpreter(mut self, path: impl Into<PathBuf>) -> Self {
        self.interpreter = Some(path.into());
        self
    }

    /// Set the game directory.
    pub fn with_game_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.game_directory = Some(path.into());
        self
    }

    /// Set the turn timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable or disable output echo.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
