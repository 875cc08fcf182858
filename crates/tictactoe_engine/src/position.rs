//! Board positions and their text forms.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// The nine variants are the whole board, so a `Position` can never
/// address a cell outside the grid. Raw coordinates coming from a UI are
/// converted with [`Position::from_coords`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (row 0, column 0)
    TopLeft,
    /// Top-center (row 0, column 1)
    TopCenter,
    /// Top-right (row 0, column 2)
    TopRight,
    /// Middle-left (row 1, column 0)
    MiddleLeft,
    /// Center (row 1, column 1)
    Center,
    /// Middle-right (row 1, column 2)
    MiddleRight,
    /// Bottom-left (row 2, column 0)
    BottomLeft,
    /// Bottom-center (row 2, column 1)
    BottomCenter,
    /// Bottom-right (row 2, column 2)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to row-major board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from (row, column), `None` when off the board.
    pub fn from_coords(row: usize, column: usize) -> Option<Self> {
        if row < 3 && column < 3 {
            Self::from_index(row * 3 + column)
        } else {
            None
        }
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn column(self) -> usize {
        self.to_index() % 3
    }

    /// Keypad number shown on empty cells (1-9).
    pub fn number(self) -> usize {
        self.to_index() + 1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when text does not name a board position.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Not a board position: {:?} (use 1-9, row,column or a name like \"center\")", input)]
pub struct ParsePositionError {
    /// The text that failed to parse.
    pub input: String,
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses a keypad number (1-9), a zero-based `row,column` pair, or a
    /// label such as `top-left` (case-insensitive, `-`, `_` or space).
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError {
            input: s.to_string(),
        };
        let trimmed = s.trim();

        if let Ok(num) = trimmed.parse::<usize>() {
            return num
                .checked_sub(1)
                .and_then(Self::from_index)
                .ok_or_else(err);
        }

        if let Some((row, column)) = trimmed.split_once(',') {
            let row = row.trim().parse::<usize>().map_err(|_| err())?;
            let column = column.trim().parse::<usize>().map_err(|_| err())?;
            return Self::from_coords(row, column).ok_or_else(err);
        }

        let normalized: String = trimmed
            .chars()
            .map(|c| if c == '_' || c == ' ' { '-' } else { c.to_ascii_lowercase() })
            .collect();
        let normalized = match normalized.as_str() {
            "middle" | "centre" => "center".to_string(),
            other => other.to_string(),
        };
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == normalized)
            .ok_or_else(err)
    }
}
