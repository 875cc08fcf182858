//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};

/// Two-player tic-tac-toe for the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Name of the X player (overrides the config file)
    #[arg(long, global = true)]
    pub x_name: Option<String>,

    /// Name of the O player (overrides the config file)
    #[arg(long, global = true)]
    pub o_name: Option<String>,

    /// Front-end to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play by typing moves on standard input
    Console,

    /// Play in an interactive terminal UI
    Tui,
}
