//! Minimal intent recognition for console play.
//!
//! A dialogue framework normally does this; the rules here cover the
//! utterances the skill reacts to and nothing more.

use crate::manager::Context;

/// A recognized user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Start a game.
    Start {
        /// Game file name, if given.
        filename: Option<String>,
    },
    /// Save the game.
    Save {
        /// Save name, if given.
        name: Option<String>,
    },
    /// Restore a saved game.
    Restore {
        /// Save name, if given.
        name: Option<String>,
    },
    /// Leave the game.
    Quit,
    /// Anything else said while playing; forwarded to the interpreter.
    Text(String),
    /// Not something this skill handles.
    Unrecognized(String),
}

const START_VERBS: &[&str] = &["play", "open", "start"];
const FILLER: &[&str] = &["the", "fiction", "game", "story"];

/// Recognize an utterance in the given conversation context.
pub fn parse_intent(input: &str, context: Context) -> Intent {
    let input = input.trim();
    let words: Vec<&str> = input.split_whitespace().collect();
    let verb = words.first().map(|w| w.to_lowercase()).unwrap_or_default();
    let rest = words.get(1..).unwrap_or(&[]);

    match context {
        Context::Default => {
            if START_VERBS.contains(&verb.as_str()) {
                return parse_start(rest);
            }
            Intent::Unrecognized(input.to_string())
        }
        Context::InteractiveFiction => match verb.as_str() {
            "quit" if rest.is_empty() => Intent::Quit,
            "save" => Intent::Save {
                name: join_rest(rest),
            },
            "restore" => Intent::Restore {
                name: join_rest(rest),
            },
            _ => Intent::Text(input.to_string()),
        },
    }
}

fn parse_start(rest: &[&str]) -> Intent {
    let remaining: Vec<&str> = rest
        .iter()
        .copied()
        .skip_while(|w| FILLER.contains(&w.to_lowercase().as_str()))
        .collect();
    Intent::Start {
        filename: join_rest(&remaining),
    }
}

fn join_rest(rest: &[&str]) -> Option<String> {
    if rest.is_empty() {
        None
    } else {
        Some(rest.join(" "))
    }
}
