//! Sectioned key/value settings.
//!
//! Settings files are JSON objects of sections, each an object of string
//! values:
//!
//! ```json
//! {
//!   "interactive fiction": {
//!     "zvm_path": "/usr/games/dfrotz",
//!     "game_directory": "/srv/games"
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SkillError, SkillResult};

/// Section holding the interpreter settings.
pub const SECTION: &str = "interactive fiction";

/// Settings grouped by section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl Settings {
    /// Create empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from a JSON string.
    pub fn from_json(json: &str) -> SkillResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> SkillResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| SkillError::Settings(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// Look up `key` in `section`. Empty values count as unset.
    pub fn get(&self, key: &str, section: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Set `key` in `section`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>, section: &str) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>, section: &str) -> Self {
        self.set(key, value, section);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sections() {
        let settings = Settings::from_json(
            r#"{"interactive fiction": {"zvm_path": "/usr/games/dfrotz", "game_directory": ""}}"#,
        )
        .unwrap();

        assert_eq!(settings.get("zvm_path", SECTION), Some("/usr/games/dfrotz"));
        assert_eq!(settings.get("game_directory", SECTION), None);
        assert_eq!(settings.get("zvm_path", "other"), None);
    }

    #[test]
    fn invalid_json_is_settings_error() {
        let err = Settings::from_json("{not json").unwrap_err();
        assert!(matches!(err, SkillError::Settings(_)));
    }

    #[test]
    fn load_missing_file() {
        let err = Settings::load(Path::new("/nonexistent/lantern.json")).unwrap_err();
        assert!(err.to_string().contains("lantern.json"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"interactive fiction": {"game_directory": "/srv/games"}}"#,
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.get("game_directory", SECTION), Some("/srv/games"));
    }

    #[test]
    fn set_and_get() {
        let settings = Settings::new().with("zvm_path", "glulxe", SECTION);
        assert_eq!(settings.get("zvm_path", SECTION), Some("glulxe"));
    }
}
