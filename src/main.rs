//! tictactoe - console and terminal UI front-ends.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tictactoe::cli::{Cli, Command};
use tictactoe::{Console, GameConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Default filter for the console, where logs share the terminal with play.
const CONSOLE_FILTER: &str = "warn";
/// Default filter for the TUI log file.
const TUI_FILTER: &str = "info,tictactoe=debug,tictactoe_engine=debug";

fn main() -> Result<()> {
    // Load .env file (RUST_LOG may be set there)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = GameConfig::load(cli.config.as_deref())?.with_overrides(cli.x_name, cli.o_name);

    match cli.command {
        Command::Console => run_console(config),
        Command::Tui => run_tui(config),
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Run the console front-end on stdin/stdout, logging to stderr.
fn run_console(config: GameConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(CONSOLE_FILTER))
        .with_writer(io::stderr)
        .init();

    info!("Starting console game");
    let stdin = io::stdin();
    let mut console = Console::new(config, stdin.lock(), io::stdout());
    console.run()
}

/// Run the TUI, logging to a file so output does not tear the screen.
fn run_tui(config: GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(TUI_FILTER))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    tictactoe::tui::run_tui(&config)
}
