//! Strictly Minimax - tic-tac-toe decision engine
//!
//! Pure board model plus exhaustive minimax search.
//!
//! # Architecture
//!
//! - **Board model**: immutable [`Board`] values and the rules over them
//!   ([`player`], [`actions`], [`result`], [`winner`], [`terminal`], [`utility`])
//! - **Search**: [`minimax_value`] and [`minimax`], or a [`Minimax`] searcher
//!   that also reports node counts
//! - **Agents**: [`Agent`] implementations and [`play_match`] for self-play
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Action, initial_state, minimax, minimax_value, result};
//!
//! # fn example() -> Result<(), strictly_minimax::InvalidAction> {
//! let board = result(&initial_state(), Action::new(0, 0))?;
//! let board = result(&board, Action::new(1, 0))?;
//! let board = result(&board, Action::new(0, 1))?;
//!
//! // O blocks the top row, but X still forces a win.
//! assert_eq!(minimax(&board), Some(Action::new(0, 2)));
//! assert_eq!(minimax_value(&board), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod agents;
mod config;
mod games;
mod orchestrator;
mod search;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, Board, BoardParseError, Cell, InvalidAction, InvalidActionKind, Outcome, Player,
    Square, actions, initial_state, outcome, player, result, rules, successors, terminal,
    utility, winner,
};

// Crate-level exports - Search
pub use search::{Decision, Minimax, minimax, minimax_value};

// Crate-level exports - Agents and match play
pub use agents::{Agent, FirstAvailableAgent, MinimaxAgent, Strategy};
pub use orchestrator::{MatchError, MatchRecord, Ply, play_match};

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig};
