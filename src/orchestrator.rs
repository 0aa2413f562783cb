//! Drives a game between two agents.

use crate::agents::Agent;
use crate::games::tictactoe::{Action, Board, InvalidAction, Outcome, Player, rules};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A single ply as played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ply {
    /// Side that moved.
    pub player: Player,
    /// Square it took.
    pub action: Action,
}

/// Complete record of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Name of the agent playing X.
    pub x: String,
    /// Name of the agent playing O.
    pub o: String,
    /// Moves in the order they were made.
    pub history: Vec<Ply>,
    /// Position when the game ended.
    pub board: Board,
    /// How the game ended.
    pub outcome: Outcome,
}

impl MatchRecord {
    /// Name of the winning agent, if the game was not drawn.
    pub fn winner_name(&self) -> Option<&str> {
        match self.outcome.winner()? {
            Player::X => Some(&self.x),
            Player::O => Some(&self.o),
        }
    }
}

/// An agent broke the rules during a match.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MatchError {
    /// The agent proposed an action the board rejects.
    #[display("Agent {} played an invalid move: {}", agent, source)]
    IllegalMove {
        /// Offending agent.
        agent: String,
        /// Rule violation.
        source: InvalidAction,
    },

    /// The agent declined to move on a live board.
    #[display("Agent {} passed on a live board", _0)]
    NoMove(#[error(not(source))] String),
}

/// Plays `x` against `o` from the empty board until the game ends.
///
/// # Errors
///
/// Returns [`MatchError`] if an agent passes or proposes an invalid action.
#[instrument(skip_all, fields(x = %x.name(), o = %o.name()))]
pub fn play_match<'a>(
    x: &mut (dyn Agent + 'a),
    o: &mut (dyn Agent + 'a),
) -> Result<MatchRecord, MatchError> {
    info!("Starting match");

    let mut board = rules::initial_state();
    let mut history = Vec::new();

    let outcome = loop {
        if let Some(outcome) = rules::outcome(&board) {
            break outcome;
        }

        let player = rules::player(&board);
        let agent = match player {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };

        debug!(agent = %agent.name(), %player, "Waiting for move");
        let action = agent.choose(&board).ok_or_else(|| {
            warn!(agent = %agent.name(), "Agent passed");
            MatchError::NoMove(agent.name().to_string())
        })?;

        board = rules::result(&board, action).map_err(|source| {
            warn!(agent = %agent.name(), %source, "Agent played invalid move");
            MatchError::IllegalMove {
                agent: agent.name().to_string(),
                source,
            }
        })?;
        history.push(Ply { player, action });
        debug!(%player, %action, "Move made");
    };

    info!(%outcome, plies = history.len(), "Match finished");
    Ok(MatchRecord {
        x: x.name().to_string(),
        o: o.name().to_string(),
        history,
        board,
        outcome,
    })
}
