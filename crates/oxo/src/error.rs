//! Session and persistence error types.

use derive_more::{Display, Error};
use oxo_tictactoe::{GameStatus, MoveError, Position};
use tracing::instrument;

/// Persistence error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Malformed save file: {}", err))
    }
}

impl From<diesel::result::Error> for StoreError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        Self::new(format!("Diesel error: {}", err))
    }
}

impl From<diesel::ConnectionError> for StoreError {
    #[track_caller]
    fn from(err: diesel::ConnectionError) -> Self {
        Self::new(format!("Connection error: {}", err))
    }
}

/// Error returned by a rejected player move.
///
/// Every variant is recoverable: the session is unchanged and the caller
/// may simply ask for another cell.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SessionError {
    /// The cell index is outside 0-8.
    #[display("Invalid cell index {} (must be 0-8)", _0)]
    InvalidIndex(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game has already ended.
    #[display("Game is already over ({})", _0)]
    GameOver(GameStatus),

    /// The opponent strategy picked a square that was not empty.
    #[display("Opponent made an illegal move: {}", _0)]
    OpponentMove(MoveError),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::OpponentMove(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        match err {
            MoveError::SquareOccupied(pos) => SessionError::SquareOccupied(pos),
        }
    }
}
