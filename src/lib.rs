//! Two-player tic-tac-toe for the terminal.
//!
//! # Architecture
//!
//! - **Engine**: rules, turns and results live in [`tictactoe_engine`],
//!   re-exported here
//! - **Announcer**: the texts both front-ends show
//! - **Console**: line-oriented play over any reader/writer pair
//! - **TUI**: keyboard-driven board built on ratatui
//! - **Config**: player names from `tictactoe.toml` and CLI flags

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod announcer;
pub mod cli;
pub mod config;
pub mod console;
pub mod tui;

pub use announcer::Announcer;
pub use config::{ConfigError, GameConfig};
pub use console::{CommandError, Console, ConsoleCommand};

// Crate-level exports - Game types
pub use tictactoe_engine::{
    Band, Board, Cell, GameEngine, GameSnapshot, Line, Mark, MoveResult, Outcome,
    ParsePositionError, Player, Position, Rejection, Status,
};
