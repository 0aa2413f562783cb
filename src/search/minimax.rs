//! Exhaustive minimax search.
//!
//! X maximizes utility and O minimizes it. Every line of play below the
//! given board is explored to the end; nothing is pruned or cached, so
//! positions reached by different move orders are searched again.

use crate::games::tictactoe::{Action, Board, Player, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Recommended move together with the statistics of the search behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Best action for the side to move, `None` on a finished board.
    pub action: Option<Action>,
    /// Game value of the searched board under optimal play.
    pub value: i8,
    /// Boards visited, the searched board included.
    pub nodes: u64,
}

/// Minimax searcher that counts the boards it visits.
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    nodes: u64,
}

impl Minimax {
    /// Creates a searcher with a zeroed node counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Boards visited since creation.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Game value of `board` assuming both sides play optimally.
    #[instrument(level = "trace", skip(self, board))]
    pub fn value(&mut self, board: &Board) -> i8 {
        self.nodes += 1;

        if rules::terminal(board) {
            return rules::utility(board);
        }

        let values = rules::successors(board).map(|(_, child)| self.value(&child));
        match rules::player(board) {
            Player::X => values.fold(i8::MIN, i8::max),
            Player::O => values.fold(i8::MAX, i8::min),
        }
    }

    /// Best action for the side to move paired with the value it secures.
    ///
    /// Candidates are tried in row-major order and a later candidate only
    /// replaces the incumbent when strictly better, so the first optimal
    /// action wins ties. Returns `None` on a terminal board.
    #[instrument(level = "trace", skip(self, board))]
    pub fn best_action(&mut self, board: &Board) -> Option<(Action, i8)> {
        if rules::terminal(board) {
            return None;
        }

        let mover = rules::player(board);
        let mut best: Option<(Action, i8)> = None;
        for (action, child) in rules::successors(board) {
            let value = self.value(&child);
            let improves = match best {
                None => true,
                Some((_, incumbent)) => match mover {
                    Player::X => value > incumbent,
                    Player::O => value < incumbent,
                },
            };
            if improves {
                best = Some((action, value));
            }
        }
        best
    }

    /// Searches `board` and reports the recommended action.
    #[instrument(skip(self, board), fields(player = %rules::player(board)))]
    pub fn decide(&mut self, board: &Board) -> Decision {
        let start = self.nodes;
        self.nodes += 1;

        let (action, value) = match self.best_action(board) {
            Some((action, value)) => (Some(action), value),
            None => (None, rules::utility(board)),
        };

        let nodes = self.nodes - start;
        debug!(?action, value, nodes, "Search complete");
        Decision {
            action,
            value,
            nodes,
        }
    }
}

/// Game value of `board` under optimal play: `1` if X can force a win,
/// `-1` if O can, `0` for a draw.
pub fn minimax_value(board: &Board) -> i8 {
    Minimax::new().value(board)
}

/// Optimal action for the side to move, or `None` when the game is over.
pub fn minimax(board: &Board) -> Option<Action> {
    Minimax::new().best_action(board).map(|(action, _)| action)
}
