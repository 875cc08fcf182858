//! Tie detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells marked).
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks if the board is a tie: full with no winning line.
///
/// The win check runs first, so a ninth move that completes a line is a
/// win and never a tie.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    check_winner(board).is_none() && is_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    fn fill(layout: &str) -> Board {
        let mut board = Board::new();
        for (pos, c) in Position::ALL.iter().zip(layout.chars().filter(|c| !c.is_whitespace())) {
            match c {
                'X' => board.place_mark(*pos, Mark::X),
                'O' => board.place_mark(*pos, Mark::O),
                _ => true,
            };
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_tie(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_tie() {
        let board = fill("X.. .O. ...");
        assert!(!is_full(&board));
        assert!(!is_tie(&board));
    }

    #[test]
    fn test_tie_detection() {
        let board = fill("XOX OXX OXO");
        assert!(is_full(&board));
        assert!(is_tie(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_tie() {
        let board = fill("XXX OOX XOO");
        assert!(is_full(&board));
        assert!(!is_tie(&board));
    }
}
