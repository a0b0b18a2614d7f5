//! Console front end for Lantern.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lantern",
    about = "Lantern — play interactive fiction through a stdin/stdout interpreter",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a game and play it from the console
    Play {
        /// Game file name, relative to the games directory
        game: Option<String>,

        #[command(flatten)]
        options: GameOptions,
    },

    /// Check configuration and game file without starting the interpreter
    Check {
        /// Game file name, relative to the games directory
        game: Option<String>,

        #[command(flatten)]
        options: GameOptions,
    },
}

/// Options shared by every subcommand.
#[derive(Args)]
pub struct GameOptions {
    /// Interpreter executable (overrides the settings file)
    #[arg(short, long, env = "LANTERN_INTERPRETER")]
    pub interpreter: Option<PathBuf>,

    /// Directory containing game files (overrides the settings file)
    #[arg(short, long, env = "LANTERN_GAMES_DIR")]
    pub games_dir: Option<PathBuf>,

    /// JSON settings file with an "interactive fiction" section
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Turn timeout in milliseconds
    #[arg(short, long, default_value = "1000")]
    pub timeout_ms: u64,

    /// Echo every interpreter line as it is received
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { game, options } => commands::play::run(game.as_deref(), &options),
        Commands::Check { game, options } => commands::check::run(game.as_deref(), &options),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
