use std::io::{self, BufRead, Write};

use colored::Colorize;

use lantern_skill::{Reply, SessionManager};

use crate::GameOptions;

pub fn run(game: Option<&str>, options: &GameOptions) -> Result<(), String> {
    let config = super::build_config(options)?;
    let mut manager = SessionManager::new(config);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    let mut filename = game.map(str::to_string);
    loop {
        match manager
            .start(filename.as_deref())
            .map_err(|e| format!("failed to start game: {e}"))?
        {
            Reply::Answer(intro) => {
                println!("{intro}\n");
                break;
            }
            Reply::Ask { prompt, .. } => {
                print!("{} ", prompt.bold());
                io::stdout().flush().map_err(|e| e.to_string())?;
                line.clear();
                if reader.read_line(&mut line).map_err(|e| e.to_string())? == 0 {
                    return Ok(());
                }
                filename = Some(line.trim().to_string());
            }
        }
    }

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        tracing::debug!(input, "handling input");
        match manager.handle(input) {
            Ok(Reply::Answer(output)) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if !manager.is_active() {
                    break;
                }
            }
            Ok(Reply::Ask { prompt, .. }) => {
                println!("{}\n", prompt.bold());
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    if manager.is_active() {
        manager.quit().map_err(|e| e.to_string())?;
    }
    Ok(())
}
