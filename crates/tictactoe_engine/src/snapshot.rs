//! Serializable read-only view of an engine.

use super::engine::GameEngine;
use super::outcome::{Outcome, Status};
use super::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Everything a UI needs to render a game, detached from the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Cells by row, then column.
    pub board: [[Cell; 3]; 3],
    /// Name of the X player.
    pub player_x: String,
    /// Name of the O player.
    pub player_o: String,
    /// Mark whose turn it is (the last mover once finished).
    pub active: Mark,
    /// Game status.
    pub status: Status,
    /// Outcome, once finished.
    pub outcome: Option<Outcome>,
}

impl From<&GameEngine> for GameSnapshot {
    fn from(engine: &GameEngine) -> Self {
        Self {
            board: engine.board_snapshot(),
            player_x: engine.player_x().name().clone(),
            player_o: engine.player_o().name().clone(),
            active: engine.active_mark(),
            status: engine.status(),
            outcome: engine.outcome(),
        }
    }
}

impl GameEngine {
    /// Captures a serializable snapshot of the current state.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> GameSnapshot {
        self.into()
    }
}
