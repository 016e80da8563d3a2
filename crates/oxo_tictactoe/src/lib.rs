//! Pure tic-tac-toe logic for the oxo game.
//!
//! This crate owns the 3x3 board, move legality, win and draw detection,
//! and the random opponent. It performs no I/O; sessions, persistence and
//! the interactive driver live in the `oxo` crate.
//!
//! # Example
//!
//! ```
//! use oxo_tictactoe::{Board, Mark, Move, Position, apply_move};
//!
//! let mut board = Board::new();
//! let won = apply_move(&mut board, Move::new(Mark::X, Position::Center))?;
//! assert!(!won);
//! # Ok::<(), oxo_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod opponent;
mod outcome;
mod position;
mod types;

pub mod rules;

pub use action::{Move, MoveError};
pub use engine::apply_move;
pub use opponent::{Opponent, RandomOpponent, choose_automated_move};
pub use outcome::{GameStatus, MoveOutcome};
pub use position::Position;
pub use rules::{check_winner, is_full, is_winning_board};
pub use types::{Board, Mark, Square, SquareParseError};
