//! Actions and the rule error raised when one cannot be applied.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate naming the square to mark.
///
/// Ordering is row-major, so sets of actions iterate top-left to
/// bottom-right.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[display("({}, {})", row, col)]
pub struct Action {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Action {
    /// Creates a new action.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true if both coordinates lie on the 3x3 grid.
    pub fn in_bounds(&self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Why an action was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum InvalidActionKind {
    /// Row or column outside `0..=2`.
    #[display("coordinate out of bounds")]
    OutOfBounds,
    /// The target square already holds a mark.
    #[display("square is already occupied")]
    Occupied,
}

/// The action cannot be applied to the board.
///
/// The source board is never modified when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Invalid action {}: {}", action, kind)]
pub struct InvalidAction {
    /// The rejected action.
    pub action: Action,
    /// The rule it broke.
    pub kind: InvalidActionKind,
}

impl InvalidAction {
    /// Rejection for a coordinate off the grid.
    pub fn out_of_bounds(action: Action) -> Self {
        Self {
            action,
            kind: InvalidActionKind::OutOfBounds,
        }
    }

    /// Rejection for a square that already holds a mark.
    pub fn occupied(action: Action) -> Self {
        Self {
            action,
            kind: InvalidActionKind::Occupied,
        }
    }
}
