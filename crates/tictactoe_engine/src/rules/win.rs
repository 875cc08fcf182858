//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use tracing::instrument;

/// Which of the three rows or columns a line runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Band {
    /// Top row or left column.
    First,
    /// Middle row or column.
    Second,
    /// Bottom row or right column.
    Third,
}

impl Band {
    /// Zero-based row or column index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Band for a zero-based index, or `None` off the grid.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }
}

/// One of the eight lines that wins when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// A row, counted from the top.
    Row(Band),
    /// A column, counted from the left.
    Column(Band),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// All lines in evaluation order: rows, columns, main then anti diagonal.
    pub const ALL: [Line; 8] = [
        Line::Row(Band::First),
        Line::Row(Band::Second),
        Line::Row(Band::Third),
        Line::Column(Band::First),
        Line::Column(Band::Second),
        Line::Column(Band::Third),
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// The three positions on this line.
    pub fn positions(self) -> [Position; 3] {
        let at = |row: Band, column: Band| Position::ALL[row.index() * 3 + column.index()];
        match self {
            Line::Row(r) => [at(r, Band::First), at(r, Band::Second), at(r, Band::Third)],
            Line::Column(c) => [at(Band::First, c), at(Band::Second, c), at(Band::Third, c)],
            Line::MainDiagonal => [Position::TopLeft, Position::Center, Position::BottomRight],
            Line::AntiDiagonal => [Position::TopRight, Position::Center, Position::BottomLeft],
        }
    }

    /// Returns the mark filling this line, if all three cells agree.
    pub fn owner(self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.positions();
        let mark = board.cell(a).mark()?;
        (board.cell(b).mark() == Some(mark) && board.cell(c).mark() == Some(mark)).then_some(mark)
    }

    /// Checks if `pos` lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }
}

/// Returns the first uniformly marked line and its mark.
///
/// Lines are checked in [`Line::ALL`] order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Line, Mark)> {
    Line::ALL
        .into_iter()
        .find_map(|line| line.owner(board).map(|mark| (line, mark)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(_, mark)| mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.place_mark(Position::TopLeft, Mark::X);
        board.place_mark(Position::TopCenter, Mark::X);
        board.place_mark(Position::TopRight, Mark::X);
        assert_eq!(check_winner(&board), Some(Mark::X));
        assert_eq!(winning_line(&board), Some((Line::Row(Band::First), Mark::X)));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.place_mark(Position::TopRight, Mark::O);
        board.place_mark(Position::Center, Mark::O);
        board.place_mark(Position::BottomLeft, Mark::O);
        assert_eq!(winning_line(&board), Some((Line::AntiDiagonal, Mark::O)));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = Board::new();
        board.place_mark(Position::TopLeft, Mark::X);
        board.place_mark(Position::TopCenter, Mark::O);
        board.place_mark(Position::TopRight, Mark::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_rows_checked_before_columns() {
        // Row 0 and column 0 are both X; rows are checked first.
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.place_mark(pos, Mark::X);
        }
        assert_eq!(winning_line(&board), Some((Line::Row(Band::First), Mark::X)));
    }

    #[test]
    fn test_band_index_bounds() {
        assert_eq!(Band::from_index(0), Some(Band::First));
        assert_eq!(Band::from_index(2), Some(Band::Third));
        assert_eq!(Band::from_index(3), None);
        assert_eq!(Band::Second.index(), 1);
    }

    #[test]
    fn test_middle_lines_cover_middle_cells() {
        assert_eq!(
            Line::Row(Band::Second).positions(),
            [Position::MiddleLeft, Position::Center, Position::MiddleRight]
        );
        assert_eq!(
            Line::Column(Band::Third).positions(),
            [Position::TopRight, Position::MiddleRight, Position::BottomRight]
        );
    }

    #[test]
    fn test_all_lines_are_distinct() {
        for (i, a) in Line::ALL.iter().enumerate() {
            for b in &Line::ALL[i + 1..] {
                assert_ne!(a.positions(), b.positions(), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_line_positions_are_distinct() {
        for line in Line::ALL {
            let [a, b, c] = line.positions();
            assert!(a != b && b != c && a != c, "{line:?}");
        }
    }
}
