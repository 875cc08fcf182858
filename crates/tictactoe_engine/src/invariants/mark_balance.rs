//! Mark balance invariant: X never trails O and leads by at most one.

use super::Invariant;
use crate::{GameEngine, Mark};

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X moves first and players alternate, so any other difference means a
/// cell was written outside the turn order.
pub struct MarkBalanceInvariant;

impl Invariant<GameEngine> for MarkBalanceInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let x = engine.board().count(Mark::X);
        let o = engine.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X leads O by zero or one marks"
    }
}
