//! Player-facing announcements derived from engine state.
//!
//! Both front-ends show the same texts; this module is the single place
//! that words them. It only reads from the engine.

use tictactoe_engine::{GameEngine, Outcome, Rejection, Status};

/// Builds announcement texts for one engine.
#[derive(Debug, Clone, Copy)]
pub struct Announcer<'a> {
    engine: &'a GameEngine,
}

impl<'a> Announcer<'a> {
    /// Creates an announcer reading from `engine`.
    pub fn new(engine: &'a GameEngine) -> Self {
        Self { engine }
    }

    /// Lines printed when a game starts.
    pub fn game_starts(&self) -> [String; 3] {
        [
            "Game starts.".to_string(),
            format!("Player X: {}", self.engine.player_x().name()),
            format!("Player O: {}", self.engine.player_o().name()),
        ]
    }

    /// Headline: who plays whom, or the result once the game is over.
    pub fn matchup(&self) -> String {
        self.result().unwrap_or_else(|| {
            format!(
                "{}(X) VS {}(O)",
                self.engine.player_x().name(),
                self.engine.player_o().name()
            )
        })
    }

    /// Whose turn it is; empty once the game is over.
    pub fn turn(&self) -> String {
        match self.engine.status() {
            Status::NotStarted => "Start a game to play.".to_string(),
            Status::Active => format!("{}'s turn.", self.engine.active_player_name()),
            Status::Finished => String::new(),
        }
    }

    /// The winner or tie announcement, once the game is over.
    pub fn result(&self) -> Option<String> {
        match self.engine.outcome()? {
            Outcome::Win(mark) => Some(format!("The winner is {}.", self.engine.player(mark).name())),
            Outcome::Tie => Some("A tie.".to_string()),
        }
    }

    /// Message for a refused move.
    pub fn rejection(reason: Rejection) -> String {
        reason.to_string()
    }
}
