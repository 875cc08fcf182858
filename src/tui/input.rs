//! Key handling: cursor movement and key-to-action mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_engine::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(Position),
    /// Play at a position.
    Play(Position),
    /// Start again with the same names.
    Restart,
    /// Leave the TUI.
    Quit,
    /// Nothing to do.
    None,
}

/// Moves cursor based on arrow keys (or vi keys), stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let (row, column) = match key {
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), column),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(2), column),
        KeyCode::Left | KeyCode::Char('h') => (row, column.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (column + 1).min(2)),
        _ => (row, column),
    };
    Position::from_coords(row, column).unwrap_or(cursor)
}

/// Maps a key press to an action, given the current cursor.
pub fn action_for(cursor: Position, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') => Action::Restart,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Play(cursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map_or(Action::None, Action::Play),
        code => {
            let moved = move_cursor(cursor, code);
            if moved == cursor {
                Action::None
            } else {
                Action::Cursor(moved)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_and_stops_at_edges() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
    }

    #[test]
    fn test_action_for_keys() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(action_for(Position::Center, key(KeyCode::Enter)), Action::Play(Position::Center));
        assert_eq!(action_for(Position::Center, key(KeyCode::Char('1'))), Action::Play(Position::TopLeft));
        assert_eq!(action_for(Position::Center, key(KeyCode::Char('r'))), Action::Restart);
        assert_eq!(action_for(Position::Center, key(KeyCode::Esc)), Action::Quit);
        assert_eq!(action_for(Position::TopLeft, key(KeyCode::Up)), Action::None);
        assert_eq!(
            action_for(Position::TopLeft, key(KeyCode::Down)),
            Action::Cursor(Position::MiddleLeft)
        );
        assert_eq!(
            action_for(Position::Center, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }
}
