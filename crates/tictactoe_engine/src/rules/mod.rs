//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The engine calls them
//! after every placement; adapters may call them to highlight results.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{Band, Line, check_winner, winning_line};
