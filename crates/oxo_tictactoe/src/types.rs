//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// A mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// The human player's mark (moves first).
    X,
    /// The automated opponent's mark.
    O,
}

/// Error returned when a character does not encode a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Invalid square character {:?} (expected 'X', 'O' or ' ')", _0)]
pub struct SquareParseError(pub char);

impl std::error::Error for SquareParseError {}

/// A square on the tic-tac-toe board.
///
/// Serialized as a single character: `'X'`, `'O'`, or `' '` for empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the single-character encoding of this square.
    pub fn as_char(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(Mark::X) => 'X',
            Square::Occupied(Mark::O) => 'O',
        }
    }
}

impl From<Square> for char {
    fn from(square: Square) -> Self {
        square.as_char()
    }
}

impl TryFrom<char> for Square {
    type Error = SquareParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            ' ' => Ok(Square::Empty),
            'X' => Ok(Square::Occupied(Mark::X)),
            'O' => Ok(Square::Occupied(Mark::O)),
            other => Err(SquareParseError(other)),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board holding exactly the given squares.
    ///
    /// No legality check is made; any pattern of marks is accepted.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Builds a board from a slice, or `None` unless it holds exactly 9 squares.
    #[instrument(skip(squares), fields(len = squares.len()))]
    pub fn from_slice(squares: &[Square]) -> Option<Self> {
        let squares: [Square; 9] = squares.try_into().ok()?;
        Some(Self { squares })
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the positions that are still empty, in board order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Counts the squares holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Whether the mark counts differ by at most one.
    ///
    /// Alternating play always keeps this true; a restored board may not.
    #[instrument(skip(self))]
    pub fn is_balanced(&self) -> bool {
        let x_count = self.count(Mark::X);
        let o_count = self.count(Mark::O);
        let balanced = x_count.abs_diff(o_count) <= 1;
        if !balanced {
            warn!(x_count, o_count, "Board mark counts are unbalanced");
        }
        balanced
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based cell number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_positions().len(), 9);
        assert_eq!(board.count(Mark::X), 0);
        assert_eq!(board.count(Mark::O), 0);
    }

    #[test]
    fn test_from_slice_requires_nine_squares() {
        assert!(Board::from_slice(&[Square::Empty; 8]).is_none());
        assert!(Board::from_slice(&[Square::Empty; 10]).is_none());
        assert_eq!(Board::from_slice(&[Square::Empty; 9]), Some(Board::new()));
    }

    #[test]
    fn test_square_char_encoding() {
        for square in [Square::Empty, Square::Occupied(Mark::X), Square::Occupied(Mark::O)] {
            assert_eq!(Square::try_from(square.as_char()), Ok(square));
        }
        assert_eq!(Square::try_from('Z'), Err(SquareParseError('Z')));
    }

    #[test]
    fn test_unbalanced_board_detected() {
        let x = Square::Occupied(Mark::X);
        let mut squares = [Square::Empty; 9];
        squares[0] = x;
        squares[1] = x;
        squares[2] = x;
        assert!(!Board::from_squares(squares).is_balanced());
        assert!(Board::new().is_balanced());
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Mark::O));
        assert_eq!(board.display(), "1|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
