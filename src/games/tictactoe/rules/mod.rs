//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`] values. Rules are kept apart from board
//! storage so the search can compose them freely.

pub mod draw;
pub mod moves;
pub mod turn;
pub mod win;

pub use draw::{is_draw, is_full};
pub use moves::{actions, result, successors};
pub use turn::player;
pub use win::winner;

use super::{Board, Outcome, Player};
use tracing::instrument;

/// Returns the empty starting board.
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns true once the game is won or the board is full.
#[instrument(level = "trace", skip(board))]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a finished board from X's side: `1` for an X win, `-1` for an
/// O win, `0` otherwise.
///
/// Meant for terminal boards; a live board without a winner scores `0`.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Returns how the game ended, or `None` while it is still going.
#[instrument(level = "trace", skip(board))]
pub fn outcome(board: &Board) -> Option<Outcome> {
    if let Some(player) = winner(board) {
        Some(Outcome::Winner(player))
    } else if is_full(board) {
        Some(Outcome::Draw)
    } else {
        None
    }
}

impl Board {
    /// Player to move. See [`player`].
    pub fn player(&self) -> Player {
        player(self)
    }

    /// Empty squares. See [`actions`].
    pub fn actions(&self) -> std::collections::BTreeSet<super::Action> {
        actions(self)
    }

    /// Board after the side to move plays `action`. See [`result`].
    pub fn result(&self, action: super::Action) -> Result<Board, super::InvalidAction> {
        result(self, action)
    }

    /// Three-in-a-row holder. See [`winner`].
    pub fn winner(&self) -> Option<Player> {
        winner(self)
    }

    /// True once the game is over. See [`terminal`].
    pub fn terminal(&self) -> bool {
        terminal(self)
    }

    /// Score from X's side. See [`utility`].
    pub fn utility(&self) -> i8 {
        utility(self)
    }

    /// Final result, if any. See [`outcome`].
    pub fn outcome(&self) -> Option<Outcome> {
        outcome(self)
    }

    /// True when every square holds a mark.
    pub fn is_full(&self) -> bool {
        is_full(self)
    }
}
