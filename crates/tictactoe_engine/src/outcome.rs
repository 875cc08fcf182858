//! Result types reported by the engine.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Status {
    /// No game has been started yet.
    #[default]
    #[display("Not started")]
    NotStarted,
    /// Moves are being accepted.
    #[display("Active")]
    Active,
    /// The game has ended; see the outcome.
    #[display("Finished")]
    Finished,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a line.
    Win(Mark),
    /// The board filled with no line completed.
    Tie,
}

impl Outcome {
    /// Returns the winning mark if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(mark) => write!(f, "{} wins", mark),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Why a move was refused. The engine state is unchanged in every case.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Rejection {
    /// No game is in progress (never started, or already finished).
    #[display("Start the game first")]
    NotActive,
    /// The selected cell already holds a mark.
    #[display("Selected cell is unavailable")]
    CellTaken,
    /// The coordinates are outside the 3x3 grid.
    #[display("Position is outside the board")]
    OutOfBounds,
}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    /// The mark was placed.
    Accepted,
    /// The move was refused.
    Rejected(Rejection),
}

impl MoveResult {
    /// Returns true if the move was placed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted)
    }

    /// Returns the rejection reason, if any.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveResult::Accepted => None,
            MoveResult::Rejected(reason) => Some(*reason),
        }
    }
}
