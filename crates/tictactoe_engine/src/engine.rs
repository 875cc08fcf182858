//! Game engine: turn handling, move validation and end-of-game detection.

use super::invariants::{EngineInvariants, InvariantSet};
use super::outcome::{MoveResult, Outcome, Rejection, Status};
use super::player::Player;
use super::position::Position;
use super::rules::{self, Line};
use super::types::{Board, Cell, Mark};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Each engine owns its whole state; independent engines never share
/// anything. The engine starts in [`Status::NotStarted`] and only accepts
/// moves between [`GameEngine::start`] and the end of the game.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    player_x: Player,
    player_o: Player,
    active: Mark,
    status: Status,
    outcome: Option<Outcome>,
}

impl GameEngine {
    /// Creates an engine with no game started.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            player_x: Player::new(Mark::X),
            player_o: Player::new(Mark::O),
            active: Mark::X,
            status: Status::NotStarted,
            outcome: None,
        }
    }

    /// Starts a fresh game, abandoning any game in progress.
    ///
    /// Missing or blank names fall back to "Player X" / "Player O".
    #[instrument(skip(self))]
    pub fn start(&mut self, name_x: Option<&str>, name_o: Option<&str>) {
        self.board = Board::new();
        self.player_x.rename(name_x);
        self.player_o.rename(name_o);
        self.active = Mark::X;
        self.status = Status::Active;
        self.outcome = None;

        info!(
            player_x = %self.player_x.name(),
            player_o = %self.player_o.name(),
            "Game started"
        );
    }

    /// Plays the active player's mark at (row, column).
    ///
    /// With no game in progress every request is [`Rejection::NotActive`];
    /// otherwise coordinates outside the grid are [`Rejection::OutOfBounds`].
    #[instrument(skip(self))]
    pub fn play_round(&mut self, row: usize, column: usize) -> MoveResult {
        if self.status != Status::Active {
            debug!(status = %self.status, "Move refused, no game in progress");
            return MoveResult::Rejected(Rejection::NotActive);
        }

        match Position::from_coords(row, column) {
            Some(pos) => self.play(pos),
            None => {
                debug!("Coordinates outside the board");
                MoveResult::Rejected(Rejection::OutOfBounds)
            }
        }
    }

    /// Plays the active player's mark at `pos`.
    #[instrument(skip(self), fields(mark = %self.active))]
    pub fn play(&mut self, pos: Position) -> MoveResult {
        if self.status != Status::Active {
            debug!(status = %self.status, "Move refused, no game in progress");
            return MoveResult::Rejected(Rejection::NotActive);
        }

        if !self.board.place_mark(pos, self.active) {
            debug!("Move refused, cell taken");
            return MoveResult::Rejected(Rejection::CellTaken);
        }

        if rules::check_winner(&self.board) == Some(self.active) {
            self.finish(Outcome::Win(self.active));
        } else if rules::is_full(&self.board) {
            self.finish(Outcome::Tie);
        } else {
            self.active = self.active.opponent();
            debug!(next = %self.active, "Turn passed");
        }

        self.assert_invariants();
        MoveResult::Accepted
    }

    fn finish(&mut self, outcome: Outcome) {
        self.status = Status::Finished;
        self.outcome = Some(outcome);
        match outcome {
            Outcome::Win(mark) => info!(winner = %self.player(mark).name(), "Game won"),
            Outcome::Tie => info!("Game tied"),
        }
    }

    fn assert_invariants(&self) {
        if cfg!(debug_assertions) {
            let checked = EngineInvariants::check_all(self);
            debug_assert!(checked.is_ok(), "Engine invariants violated: {:?}", checked);
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns a copy of the grid for rendering.
    pub fn board_snapshot(&self) -> [[Cell; 3]; 3] {
        self.board.rows()
    }

    /// Returns the X player.
    pub fn player_x(&self) -> &Player {
        &self.player_x
    }

    /// Returns the O player.
    pub fn player_o(&self) -> &Player {
        &self.player_o
    }

    /// Returns the player holding `mark`.
    pub fn player(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
        }
    }

    /// Returns the mark of the player whose turn it is.
    ///
    /// After a game ends this is the player who made the last move.
    pub fn active_mark(&self) -> Mark {
        self.active
    }

    /// Returns the player whose turn it is.
    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    /// Returns the name of the player whose turn it is.
    pub fn active_player_name(&self) -> &str {
        self.active_player().name()
    }

    /// Returns the game status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the outcome; `Some` only once the game is finished.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the winning player, if the game was won.
    pub fn winner(&self) -> Option<&Player> {
        self.outcome
            .and_then(|o| o.winner())
            .map(|mark| self.player(mark))
    }

    /// Returns the completed line, if the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.outcome?.winner()?;
        rules::winning_line(&self.board).map(|(line, _)| line)
    }

    /// Returns the empty positions in board order.
    pub fn available_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.board.is_empty(pos))
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_not_started() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.status(), Status::NotStarted);
        assert_eq!(engine.outcome(), None);
        assert_eq!(
            engine.play_round(0, 0),
            MoveResult::Rejected(Rejection::NotActive)
        );
        assert_eq!(engine.status(), Status::NotStarted);
        assert_eq!(engine.board().filled(), 0);
    }

    #[test]
    fn test_start_resets_state() {
        let mut engine = GameEngine::new();
        engine.start(Some("Ann"), Some("Bob"));
        assert_eq!(engine.play_round(1, 1), MoveResult::Accepted);
        assert_eq!(engine.active_player_name(), "Bob");

        engine.start(None, Some(""));
        assert_eq!(engine.status(), Status::Active);
        assert_eq!(engine.board().filled(), 0);
        assert_eq!(engine.active_mark(), Mark::X);
        assert_eq!(engine.player_x().name(), "Player X");
        assert_eq!(engine.player_o().name(), "Player O");
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut engine = GameEngine::new();
        engine.start(None, None);
        assert_eq!(
            engine.play_round(3, 0),
            MoveResult::Rejected(Rejection::OutOfBounds)
        );
        assert_eq!(
            engine.play_round(0, 7),
            MoveResult::Rejected(Rejection::OutOfBounds)
        );
        assert_eq!(engine.board().filled(), 0);
        assert_eq!(engine.active_mark(), Mark::X);
    }

    #[test]
    fn test_not_active_takes_precedence_over_bounds() {
        let mut engine = GameEngine::new();
        assert_eq!(
            engine.play_round(3, 0),
            MoveResult::Rejected(Rejection::NotActive)
        );
        assert_eq!(engine.status(), Status::NotStarted);

        engine.start(None, None);
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            engine.play_round(r, c);
        }
        assert_eq!(engine.status(), Status::Finished);
        assert_eq!(
            engine.play_round(0, 9),
            MoveResult::Rejected(Rejection::NotActive)
        );
    }

    #[test]
    fn test_winning_line_reported() {
        let mut engine = GameEngine::new();
        engine.start(None, None);
        for (r, c) in [(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)] {
            assert!(engine.play_round(r, c).is_accepted());
        }
        assert_eq!(engine.outcome(), Some(Outcome::Win(Mark::X)));
        assert_eq!(engine.winning_line(), Some(Line::MainDiagonal));
        assert_eq!(engine.winner().map(|p| p.name().as_str()), Some("Player X"));
    }

    #[test]
    fn test_available_positions_shrink() {
        let mut engine = GameEngine::new();
        engine.start(None, None);
        assert_eq!(engine.available_positions().len(), 9);
        engine.play(Position::Center);
        let open = engine.available_positions();
        assert_eq!(open.len(), 8);
        assert!(!open.contains(&Position::Center));
    }
}
