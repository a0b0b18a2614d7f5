use lantern_skill::SessionManager;

use crate::GameOptions;

pub fn run(game: Option<&str>, options: &GameOptions) -> Result<(), String> {
    let game = game
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .ok_or("no game given; pass a game file name")?;
    let config = super::build_config(options)?;
    let manager = SessionManager::new(config);
    let (interpreter, path) = manager.resolve_game(game).map_err(|e| e.to_string())?;

    println!("  All checks passed for '{game}'.");
    println!("  interpreter: {}", interpreter.display());
    println!("  game file:   {}", path.display());
    println!("  timeout:     {} ms", options.timeout_ms);

    Ok(())
}
