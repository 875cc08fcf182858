//! Application state and logic.

use super::input::{self, Action};
use crate::announcer::Announcer;
use crate::config::GameConfig;
use crossterm::event::KeyEvent;
use tictactoe_engine::{GameEngine, Position};
use tracing::{debug, instrument};

/// Main application state.
pub struct App {
    engine: GameEngine,
    cursor: Position,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates an application with a game already started.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        let mut engine = GameEngine::new();
        engine.start(
            config.player_x_name().as_deref(),
            config.player_o_name().as_deref(),
        );
        Self {
            engine,
            cursor: Position::Center,
            notice: None,
            should_quit: false,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the last notice (e.g. a refused move), if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = input::action_for(self.cursor, key);
        self.apply(action);
    }

    /// Applies an action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Cursor(pos) => self.cursor = pos,
            Action::Play(pos) => {
                self.cursor = pos;
                self.notice = self.engine.play(pos).rejection().map(|reason| {
                    debug!(%reason, "Move refused");
                    Announcer::rejection(reason)
                });
            }
            Action::Restart => self.restart(),
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    /// Restarts the game with the same names.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        let x = self.engine.player_x().name().clone();
        let o = self.engine.player_o().name().clone();
        self.engine.start(Some(&x), Some(&o));
        self.cursor = Position::Center;
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{Outcome, Status};

    #[test]
    fn test_refused_move_sets_notice() {
        let mut app = App::new(&GameConfig::default());
        app.apply(Action::Play(Position::Center));
        assert_eq!(app.notice(), None);

        app.apply(Action::Play(Position::Center));
        assert_eq!(app.notice(), Some("Selected cell is unavailable"));

        app.apply(Action::Play(Position::TopLeft));
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn test_restart_keeps_names() {
        let config = GameConfig::new(Some("Ann".into()), Some("Bob".into()));
        let mut app = App::new(&config);
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomRight,
            Position::TopRight,
        ] {
            app.apply(Action::Play(pos));
        }
        assert_eq!(app.engine().outcome(), Some(Outcome::Win(tictactoe_engine::Mark::X)));

        app.apply(Action::Restart);
        assert_eq!(app.engine().status(), Status::Active);
        assert_eq!(app.engine().player_x().name(), "Ann");
        assert_eq!(app.engine().player_o().name(), "Bob");
        assert_eq!(app.engine().board().filled(), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(&GameConfig::default());
        assert!(!app.should_quit());
        app.apply(Action::Quit);
        assert!(app.should_quit());
    }
}
