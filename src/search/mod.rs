//! Game-tree search over tic-tac-toe boards.

mod minimax;

pub use minimax::{Decision, Minimax, minimax, minimax_value};
