//! Session management for the conversational layer.
//!
//! `SessionManager` holds at most one running interpreter and maps each
//! conversational event (start, free text, save, restore, quit) to a turn
//! against it.

use std::path::{Component, Path, PathBuf};

use lantern_bridge::{Command, GameState, ProcessConfig, ProcessSession};

use crate::config::{GAME_DIRECTORY_KEY, INTERPRETER_KEY, SkillConfig};
use crate::error::{SkillError, SkillResult};
use crate::intent::{Intent, parse_intent};

/// Tracing target for game results worth keeping in the log.
const LOG_TARGET: &str = "interactive_fiction";

/// Conversation mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Context {
    /// No game running; only start requests are handled.
    #[default]
    Default,
    /// A game is running; free text goes to the interpreter.
    InteractiveFiction,
}

/// What to say back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A final answer for this turn.
    Answer(String),
    /// A required value is missing; ask for it and call again.
    Ask {
        /// Name of the missing slot.
        slot: &'static str,
        /// Question to show the user.
        prompt: String,
    },
}

impl Reply {
    /// The text to show the user.
    pub fn text(&self) -> &str {
        match self {
            Self::Answer(text) => text,
            Self::Ask { prompt, .. } => prompt,
        }
    }
}

/// Owner of the (single) interpreter session.
pub struct SessionManager {
    config: SkillConfig,
    session: Option<ProcessSession>,
    context: Context,
}

impl SessionManager {
    /// Create a manager with no running game.
    pub fn new(config: SkillConfig) -> Self {
        Self {
            config,
            session: None,
            context: Context::Default,
        }
    }

    /// The configuration games are started with.
    pub fn config(&self) -> &SkillConfig {
        &self.config
    }

    /// The current conversation mode.
    pub fn context(&self) -> Context {
        self.context
    }

    /// Whether a game is running.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The running session, if any.
    pub fn session(&self) -> Option<&ProcessSession> {
        self.session.as_ref()
    }

    /// Check configuration and resolve a game file name.
    ///
    /// The name must stay inside the game directory: absolute paths and `..`
    /// are rejected. Returns the interpreter path and the full game path.
    /// Nothing is spawned.
    pub fn resolve_game(&self, filename: &str) -> SkillResult<(PathBuf, PathBuf)> {
        let interpreter = self
            .config
            .interpreter
            .clone()
            .ok_or(SkillError::ConfigurationMissing(INTERPRETER_KEY))?;
        let directory = self
            .config
            .game_directory
            .as_ref()
            .ok_or(SkillError::ConfigurationMissing(GAME_DIRECTORY_KEY))?;

        let name = Path::new(filename);
        if !name
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(SkillError::InvalidGameName(filename.to_string()));
        }

        let game = directory.join(name);
        if !game.is_file() {
            return Err(SkillError::GameFileNotFound(game));
        }
        Ok((interpreter, game))
    }

    /// Start a game and return its opening text.
    pub fn start(&mut self, filename: Option<&str>) -> SkillResult<Reply> {
        if self.session.is_some() {
            return Err(SkillError::SessionActive);
        }
        if self.config.interpreter.is_none() {
            return Err(SkillError::ConfigurationMissing(INTERPRETER_KEY));
        }
        if self.config.game_directory.is_none() {
            return Err(SkillError::ConfigurationMissing(GAME_DIRECTORY_KEY));
        }
        let Some(filename) = filename.filter(|f| !f.trim().is_empty()) else {
            return Ok(Reply::Ask {
                slot: "filename",
                prompt: "Which fiction would you play?".to_string(),
            });
        };

        let (interpreter, game) = self.resolve_game(filename.trim())?;
        let process = ProcessConfig::new(interpreter, game)
            .with_timeout(self.config.timeout)
            .with_verbose(self.config.verbose);

        // On failure the session is dropped here, which reaps the process.
        let mut session = ProcessSession::spawn(process)?;
        session.initialize()?;
        let intro = session.receive_output()?;

        self.session = Some(session);
        self.context = Context::InteractiveFiction;
        Ok(Reply::Answer(intro))
    }

    /// Send free text to the interpreter as one line.
    pub fn forward(&mut self, text: &str) -> SkillResult<Reply> {
        let session = self.active()?;
        session.send_input(&Command::new(text))?;
        Ok(Reply::Answer(session.receive_output()?))
    }

    /// Save the game under `name`.
    pub fn save(&mut self, name: Option<&str>) -> SkillResult<Reply> {
        self.save_or_restore("save", name)
    }

    /// Restore the game saved under `name`.
    pub fn restore(&mut self, name: Option<&str>) -> SkillResult<Reply> {
        self.save_or_restore("restore", name)
    }

    /// Stop the game and release the interpreter.
    pub fn quit(&mut self) -> SkillResult<Reply> {
        let mut session = self.session.take().ok_or(SkillError::NoActiveSession)?;
        self.context = Context::Default;
        session.close()?;
        Ok(Reply::Answer("Goodbye".to_string()))
    }

    /// Recognize an utterance and run the matching operation.
    pub fn handle(&mut self, input: &str) -> SkillResult<Reply> {
        match parse_intent(input, self.context) {
            Intent::Start { filename } => self.start(filename.as_deref()),
            Intent::Save { name } => self.save(name.as_deref()),
            Intent::Restore { name } => self.restore(name.as_deref()),
            Intent::Quit => self.quit(),
            Intent::Text(text) => self.forward(&text),
            Intent::Unrecognized(_) => Ok(Reply::Answer(
                "Say 'play <game file>' to start a game.".to_string(),
            )),
        }
    }

    fn save_or_restore(&mut self, verb: &str, name: Option<&str>) -> SkillResult<Reply> {
        let session = self.active()?;
        let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
            return Ok(Reply::Ask {
                slot: "save_name",
                prompt: "Please enter a name".to_string(),
            });
        };

        session.send_input(&Command::new(verb))?;
        session.send_input(&Command::new(name.trim()))?;
        let output = session.receive_output()?;
        tracing::info!(target: LOG_TARGET, verb, name, "{output}");
        Ok(Reply::Answer(output))
    }

    fn active(&mut self) -> SkillResult<&mut ProcessSession> {
        self.session.as_mut().ok_or(SkillError::NoActiveSession)
    }
}
