//! Input commands sent to an interpreter.

use std::fmt;

/// How a command is delivered to the interpreter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputKind {
    /// A full line, terminated by a newline.
    #[default]
    Line,
    /// A single keypress. No bridge accepts this yet.
    Char,
}

impl InputKind {
    /// Get the display name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Char => "char",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single unit of player input.
///
/// Commands are plain values: the payload is not validated here, the
/// bridge that consumes the command decides whether it can deliver it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    payload: String,
    kind: InputKind,
}

impl Command {
    /// Create a line command.
    pub fn new(payload: impl Into<String>) -> Self {
        Self::with_kind(payload, InputKind::Line)
    }

    /// Create a command of an explicit kind.
    pub fn with_kind(payload: impl Into<String>, kind: InputKind) -> Self {
        Self {
            payload: payload.into(),
            kind,
        }
    }

    /// The text to send.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// How the payload should be delivered.
    pub fn kind(&self) -> InputKind {
        self.kind
    }
}

impl From<&str> for Command {
    fn from(payload: &str) -> Self {
        Self::new(payload)
    }
}

impl From<String> for Command {
    fn from(payload: String) -> Self {
        Self::new(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults_to_line() {
        let cmd = Command::new("look");
        assert_eq!(cmd.payload(), "look");
        assert_eq!(cmd.kind(), InputKind::Line);
    }

    #[test]
    fn with_kind_keeps_kind() {
        let cmd = Command::with_kind("y", InputKind::Char);
        assert_eq!(cmd.kind(), InputKind::Char);
        assert_eq!(cmd.payload(), "y");
    }

    #[test]
    fn no_validation_on_construction() {
        let cmd = Command::new("");
        assert!(cmd.payload().is_empty());

        let cmd = Command::new("go north\nthen south");
        assert!(cmd.payload().contains('\n'));
    }

    #[test]
    fn from_str_and_string() {
        assert_eq!(Command::from("take lamp"), Command::new("take lamp"));
        assert_eq!(
            Command::from("inventory".to_string()),
            Command::new("inventory")
        );
    }

    #[test]
    fn kind_display() {
        assert_eq!(InputKind::Line.to_string(), "line");
        assert_eq!(InputKind::Char.to_string(), "char");
    }
}
