//! Tic-tac-toe board model.

mod action;
mod outcome;
pub mod rules;
mod types;

pub use action::{Action, InvalidAction, InvalidActionKind};
pub use outcome::Outcome;
pub use rules::{
    actions, initial_state, outcome, player, result, successors, terminal, utility, winner,
};
pub use types::{Board, BoardParseError, Player, Square};

/// Alias for the contents of a square, as seen from the grid.
pub type Cell = Square;
