//! Move generation and application for tic-tac-toe.

use super::super::{Action, Board, InvalidAction};
use super::turn::player;
use std::collections::BTreeSet;
use tracing::{instrument, trace};

/// Returns every action that targets an empty square.
///
/// The set iterates in row-major order. It is empty for a full board.
#[instrument(level = "trace", skip(board))]
pub fn actions(board: &Board) -> BTreeSet<Action> {
    (0..Board::SIZE)
        .flat_map(|row| (0..Board::SIZE).map(move |col| Action::new(row, col)))
        .filter(|&action| board.is_empty(action))
        .collect()
}

/// Returns the board that results from the side to move playing `action`.
///
/// The source board is left as it was whether or not the action is valid.
///
/// # Errors
///
/// Returns [`InvalidAction`] when either coordinate is outside `0..=2` or
/// the target square is occupied.
#[instrument(level = "trace", skip(board))]
pub fn result(board: &Board, action: Action) -> Result<Board, InvalidAction> {
    if !action.in_bounds() {
        return Err(InvalidAction::out_of_bounds(action));
    }
    if !board.is_empty(action) {
        return Err(InvalidAction::occupied(action));
    }

    let mark = player(board);
    let mut next = *board;
    next.place(action, mark);
    trace!(%mark, "Applied action");
    Ok(next)
}

/// Yields each legal action paired with the board it produces, in
/// row-major order.
pub fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> {
    let board = *board;
    let mark = player(&board);
    actions(&board).into_iter().map(move |action| {
        let mut next = board;
        next.place(action, mark);
        (action, next)
    })
}
