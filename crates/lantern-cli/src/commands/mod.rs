pub mod check;
pub mod play;

use std::time::Duration;

use lantern_skill::{Settings, SkillConfig};

use crate::GameOptions;

/// Build the session configuration: settings file first, flags on top.
fn build_config(options: &GameOptions) -> Result<SkillConfig, String> {
    let settings = match &options.settings {
        Some(path) => Settings::load(path).map_err(|e| e.to_string())?,
        None => Settings::new(),
    };

    let mut config = SkillConfig::from_settings(&settings)
        .with_timeout(Duration::from_millis(options.timeout_ms))
        .with_verbose(options.verbose);
    if let Some(interpreter) = &options.interpreter {
        config = config.with_interpreter(interpreter);
    }
    if let Some(dir) = &options.games_dir {
        config = config.with_game_directory(dir);
    }
    Ok(config)
}
