//! Turn derivation for tic-tac-toe.

use super::super::{Board, Player};
use tracing::instrument;

/// Returns the player to move.
///
/// X moves first; afterwards the side with fewer marks is on move. The
/// answer is still defined, though meaningless, for finished boards.
#[instrument(level = "trace", skip(board))]
pub fn player(board: &Board) -> Player {
    if board.mark_count(Player::X) == board.mark_count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}
