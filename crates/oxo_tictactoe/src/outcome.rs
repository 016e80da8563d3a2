//! Turn outcomes and game status.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Classification of the board after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Nobody has won and the game goes on.
    Continue,
    /// The player (X) completed a line.
    PlayerWon,
    /// The opponent (O) completed a line.
    OpponentWon,
    /// The board filled up without a line.
    Draw,
}

impl MoveOutcome {
    /// The outcome of a line completed by `mark`.
    pub fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::X => MoveOutcome::PlayerWon,
            Mark::O => MoveOutcome::OpponentWon,
        }
    }

    /// Returns true if the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continue)
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Continue => write!(f, "Game continues"),
            MoveOutcome::PlayerWon => write!(f, "Winner is {}", Mark::X),
            MoveOutcome::OpponentWon => write!(f, "Winner is {}", Mark::O),
            MoveOutcome::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// Current status of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    #[strum(to_string = "in progress")]
    InProgress,
    /// The player won.
    #[strum(to_string = "player won")]
    PlayerWon,
    /// The opponent won.
    #[strum(to_string = "opponent won")]
    OpponentWon,
    /// Game ended in a draw.
    #[strum(to_string = "draw")]
    Draw,
}

impl GameStatus {
    /// Returns true if no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

impl From<MoveOutcome> for GameStatus {
    fn from(outcome: MoveOutcome) -> Self {
        match outcome {
            MoveOutcome::Continue => GameStatus::InProgress,
            MoveOutcome::PlayerWon => GameStatus::PlayerWon,
            MoveOutcome::OpponentWon => GameStatus::OpponentWon,
            MoveOutcome::Draw => GameStatus::Draw,
        }
    }
}
