//! Move application.

use super::action::{Move, MoveError};
use super::rules::is_winning_board;
use super::types::{Board, Square};
use tracing::{debug, instrument};

/// Places a mark on the board.
///
/// Returns whether the board holds a winning line afterwards. The board is
/// left untouched when the move fails.
///
/// # Errors
///
/// Returns [`MoveError::SquareOccupied`] if the target square is not empty.
#[instrument(skip(board), fields(mark = %mov.mark, position = %mov.position))]
pub fn apply_move(board: &mut Board, mov: Move) -> Result<bool, MoveError> {
    if !board.is_empty(mov.position) {
        debug!("Rejected move onto occupied square");
        return Err(MoveError::SquareOccupied(mov.position));
    }

    board.set(mov.position, Square::Occupied(mov.mark));
    let won = is_winning_board(board);
    debug!(won, "Move applied");
    Ok(won)
}
