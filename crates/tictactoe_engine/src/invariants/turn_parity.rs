//! Turn parity invariant: the active mark follows from the mark counts.

use super::Invariant;
use crate::{GameEngine, Mark, Status};

/// Invariant: while a game is active, X is to move iff X and O have placed
/// the same number of marks.
pub struct TurnParityInvariant;

impl Invariant<GameEngine> for TurnParityInvariant {
    fn holds(engine: &GameEngine) -> bool {
        if engine.status() != Status::Active {
            return true;
        }
        let even = engine.board().count(Mark::X) == engine.board().count(Mark::O);
        (engine.active_mark() == Mark::X) == even
    }

    fn description() -> &'static str {
        "Active player matches turn parity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Position};

    #[test]
    fn test_holds_through_a_game() {
        let mut engine = GameEngine::new();
        engine.start(None, None);
        for pos in [Position::TopLeft, Position::Center, Position::BottomLeft] {
            engine.play(pos);
            assert!(TurnParityInvariant::holds(&engine));
        }
    }

    #[test]
    fn test_stray_mark_violates() {
        let mut engine = GameEngine::new();
        engine.start(None, None);
        engine.play(Position::Center);
        engine.board_mut().force(Position::TopLeft, Cell::Marked(Mark::O));
        // Counts are even again but O is still recorded as active.
        assert!(!TurnParityInvariant::holds(&engine));
    }
}
