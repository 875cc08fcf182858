//! Tic-tac-toe rule engine.
//!
//! A 3x3 board, two players taking turns, and win/tie detection. The
//! engine is synchronous and owns all of its state; UI adapters drive it
//! through [`GameEngine`] and render from its read-only queries.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, MoveResult, Outcome, Mark, Status};
//!
//! let mut engine = GameEngine::new();
//! engine.start(Some("Ann"), Some("Bob"));
//! for (row, column) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     assert_eq!(engine.play_round(row, column), MoveResult::Accepted);
//! }
//! assert_eq!(engine.status(), Status::Finished);
//! assert_eq!(engine.outcome(), Some(Outcome::Win(Mark::X)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
pub mod invariants;
mod outcome;
mod player;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use engine::GameEngine;
pub use outcome::{MoveResult, Outcome, Rejection, Status};
pub use player::Player;
pub use position::{ParsePositionError, Position};
pub use rules::{Band, Line};
pub use snapshot::GameSnapshot;
pub use types::{Board, Cell, Mark};
