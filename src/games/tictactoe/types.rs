//! Core domain types for tic-tac-toe.

use super::action::Action;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{instrument, warn};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values. Applying an action through
/// [`result`](super::rules::result) copies the board and never touches
/// the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    /// Squares indexed as `squares[row][col]`.
    squares: [[Square; 3]; 3],
}

impl Board {
    /// Side length of the grid.
    pub const SIZE: usize = 3;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; 3]; 3],
        }
    }

    /// Creates a board from explicit rows.
    pub fn from_squares(squares: [[Square; 3]; 3]) -> Self {
        Self { squares }
    }

    /// Gets the square addressed by `action`, or `None` when out of range.
    pub fn get(&self, action: Action) -> Option<Square> {
        self.squares
            .get(action.row)
            .and_then(|row| row.get(action.col))
            .copied()
    }

    /// Checks if the square addressed by `action` exists and is empty.
    pub fn is_empty(&self, action: Action) -> bool {
        matches!(self.get(action), Some(Square::Empty))
    }

    /// Returns all squares as rows.
    pub fn squares(&self) -> &[[Square; 3]; 3] {
        &self.squares
    }

    /// Counts the marks placed by `player`.
    pub fn mark_count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|&&sq| sq == Square::Occupied(player))
            .count()
    }

    /// Checks that mark counts could arise from alternating play with X first.
    #[instrument(skip(self))]
    pub fn is_consistent(&self) -> bool {
        let x_count = self.mark_count(Player::X);
        let o_count = self.mark_count(Player::O);
        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }

    /// Writes `player`'s mark into a square. Bounds are checked by the caller.
    pub(super) fn place(&mut self, action: Action, player: Player) {
        self.squares[action.row][action.col] = Square::Occupied(player);
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.squares.iter().enumerate() {
            let [a, b, c] = row.map(Square::symbol);
            write!(f, "{}|{}|{}", a, b, c)?;
            if i < Self::SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// A character other than a mark, an empty marker or a separator.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidCharacter(#[error(not(source))] char),

    /// The text did not describe exactly nine squares.
    #[display("Board must have 9 squares, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine squares in row-major order.
    ///
    /// `X` and `O` (either case) are marks; `.`, `-` and `_` are empty.
    /// Whitespace, `|` and `/` are ignored so `"XO./.X./..O"` and the
    /// [`Display`](std::fmt::Display) output both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for ch in s.chars() {
            match ch {
                'X' | 'x' => cells.push(Square::Occupied(Player::X)),
                'O' | 'o' => cells.push(Square::Occupied(Player::O)),
                '.' | '_' => cells.push(Square::Empty),
                // Rows in the grid rendering are separated by "-+-+-".
                '-' if !s.contains('+') => cells.push(Square::Empty),
                '-' | '+' | '|' | '/' => {}
                c if c.is_whitespace() => {}
                c => return Err(BoardParseError::InvalidCharacter(c)),
            }
        }

        if cells.len() != 9 {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut squares = [[Square::Empty; 3]; 3];
        for (i, sq) in cells.into_iter().enumerate() {
            squares[i / 3][i % 3] = sq;
        }
        Ok(Self { squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        use strum::IntoEnumIterator;
        for player in Player::iter() {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_parse_compact() {
        let board: Board = "XX./O../...".parse().unwrap();
        assert_eq!(board.get(Action::new(0, 1)), Some(Square::Occupied(Player::X)));
        assert_eq!(board.get(Action::new(1, 0)), Some(Square::Occupied(Player::O)));
        assert_eq!(board.mark_count(Player::X), 2);
        assert_eq!(board.mark_count(Player::O), 1);
    }

    #[test]
    fn test_display_parses_back() {
        let board: Board = "XO-/-X-/--O".parse().unwrap();
        let rendered = board.to_string();
        assert_eq!(rendered, "X|O|.\n-+-+-\n.|X|.\n-+-+-\n.|.|O");
        assert_eq!(rendered.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XX?/.../...".parse::<Board>(),
            Err(BoardParseError::InvalidCharacter('?'))
        );
        assert_eq!("XO".parse::<Board>(), Err(BoardParseError::WrongLength(2)));
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(Action::new(3, 0)), None);
        assert!(!board.is_empty(Action::new(0, 3)));
    }

    #[test]
    fn test_consistency() {
        assert!(Board::new().is_consistent());
        assert!("X../.../...".parse::<Board>().unwrap().is_consistent());
        assert!(!"O../.../...".parse::<Board>().unwrap().is_consistent());
        assert!(!"XX./.../...".parse::<Board>().unwrap().is_consistent());
    }
}
