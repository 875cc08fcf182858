//! Named players.

use super::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player: a display name bound to a mark.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Mark this player places.
    mark: Mark,
}

impl Player {
    /// Creates a player with the default name for `mark`.
    pub fn new(mark: Mark) -> Self {
        Self {
            name: Self::default_name(mark).to_string(),
            mark,
        }
    }

    /// Default name used when none (or a blank one) is supplied.
    pub fn default_name(mark: Mark) -> &'static str {
        match mark {
            Mark::X => "Player X",
            Mark::O => "Player O",
        }
    }

    /// Sets the name, falling back to the default when blank.
    #[instrument(skip(self), fields(mark = %self.mark))]
    pub(crate) fn rename(&mut self, name: Option<&str>) {
        self.name = match name.map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => Self::default_name(self.mark).to_string(),
        };
    }
}
