//! Status consistency invariant: status and outcome agree with the board.

use super::Invariant;
use crate::{GameEngine, Outcome, Status, rules};

/// Invariant: a game is active iff its board is neither won nor full, and
/// an outcome is recorded iff the game is finished and matches the board.
pub struct StatusConsistentInvariant;

impl Invariant<GameEngine> for StatusConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let winner = rules::check_winner(board);
        match (engine.status(), engine.outcome()) {
            (Status::NotStarted, None) => board.filled() == 0,
            (Status::Active, None) => winner.is_none() && !board.is_full(),
            (Status::Finished, Some(Outcome::Win(mark))) => winner == Some(mark),
            (Status::Finished, Some(Outcome::Tie)) => winner.is_none() && board.is_full(),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Status and outcome agree with the board"
    }
}
