//! Move-choosing agents.

use crate::games::tictactoe::{Action, Board, rules};
use crate::search::Minimax;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Something that picks a move for the side to move.
pub trait Agent {
    /// Chooses an action, or `None` when it has nothing to play.
    fn choose(&mut self, board: &Board) -> Option<Action>;

    /// Returns the agent's display name.
    fn name(&self) -> &str;
}

/// Plays the minimax-optimal move.
#[derive(Debug, Clone)]
pub struct MinimaxAgent {
    name: String,
    search: Minimax,
}

impl MinimaxAgent {
    /// Creates a new minimax agent.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            search: Minimax::new(),
        }
    }

    /// Boards searched over the agent's lifetime.
    pub fn nodes(&self) -> u64 {
        self.search.nodes()
    }
}

impl Agent for MinimaxAgent {
    #[instrument(skip(self, board), fields(agent = %self.name))]
    fn choose(&mut self, board: &Board) -> Option<Action> {
        let decision = self.search.decide(board);
        debug!(action = ?decision.action, value = decision.value, "Agent chose move");
        decision.action
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Picks the first empty square in row-major order.
#[derive(Debug, Clone)]
pub struct FirstAvailableAgent {
    name: String,
}

impl FirstAvailableAgent {
    /// Creates a new first-available agent.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Agent for FirstAvailableAgent {
    #[instrument(skip(self, board), fields(agent = %self.name))]
    fn choose(&mut self, board: &Board) -> Option<Action> {
        if rules::terminal(board) {
            return None;
        }
        let action = rules::actions(board).first().copied();
        debug!(?action, "Agent chose move");
        action
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Named agent kinds, as written in config files and on the command line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Strategy {
    /// Exhaustive minimax search.
    #[default]
    Minimax,
    /// First empty square.
    FirstAvailable,
}

impl Strategy {
    /// Builds an agent of this kind.
    pub fn agent(self, name: impl Into<String>) -> Box<dyn Agent> {
        match self {
            Strategy::Minimax => Box::new(MinimaxAgent::new(name)),
            Strategy::FirstAvailable => Box::new(FirstAvailableAgent::new(name)),
        }
    }
}
