//! Conversational layer for playing interactive fiction.
//!
//! Turns dialogue events (start a game, say something, save, restore, quit)
//! into turns against a single interpreter process, and reports results as
//! replies or typed errors the dialogue layer can show to the user.

pub mod config;
pub mod error;
pub mod intent;
pub mod manager;
pub mod settings;

pub use config::SkillConfig;
pub use error::{SkillError, SkillResult};
pub use intent::{Intent, parse_intent};
pub use manager::{Context, Reply, SessionManager};
pub use settings::Settings;
