//! Game session: the player's move, the opponent's reply, save and restore.

use crate::{BoardStore, SessionError, StoreError};
use oxo_tictactoe::{
    Board, GameStatus, Mark, Move, MoveOutcome, Opponent, Position, RandomOpponent, apply_move,
    check_winner, is_full,
};
use tracing::{debug, info, instrument, warn};

/// Result of one call to [`Session::player_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    outcome: MoveOutcome,
    opponent_move: Option<Move>,
}

impl Turn {
    /// Combined outcome of the player's move and the reply.
    pub fn outcome(&self) -> MoveOutcome {
        self.outcome
    }

    /// The opponent's reply, if one was played.
    pub fn opponent_move(&self) -> Option<Move> {
        self.opponent_move
    }
}

/// What [`Session::restore`] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum RestoreOutcome {
    /// The saved board replaced the current one.
    #[strum(to_string = "restored saved game")]
    Restored,
    /// Nothing usable was saved; a fresh board was started.
    #[strum(to_string = "started fresh")]
    StartedFresh,
}

/// One game against the automated opponent.
///
/// The session owns its board exclusively. The player always plays
/// [`Mark::X`] and the opponent [`Mark::O`].
#[derive(Debug)]
pub struct Session<S, O = RandomOpponent> {
    board: Board,
    status: GameStatus,
    store: S,
    opponent: O,
}

impl<S: BoardStore, O: Opponent> Session<S, O> {
    /// Creates a session with an empty board.
    #[instrument(skip_all)]
    pub fn new(store: S, opponent: O) -> Self {
        info!("Creating new game session");
        Self {
            board: Board::new(),
            status: GameStatus::InProgress,
            store,
            opponent,
        }
    }

    /// Returns the board for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the persistence collaborator.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Discards the current board and starts over.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        info!("Starting new game");
        self.board = Board::new();
        self.status = GameStatus::InProgress;
    }

    /// Plays the player's mark at `index` (0-8), then the opponent's reply.
    ///
    /// The reply is skipped when the player's move wins. If no square is left
    /// for the reply the game is a draw.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::GameOver`] after a terminal outcome,
    /// [`SessionError::InvalidIndex`] outside 0-8, and
    /// [`SessionError::SquareOccupied`] for a marked cell, and
    /// [`SessionError::OpponentMove`] when the opponent picks a marked cell.
    /// None of these change the board or consume a turn.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn player_move(&mut self, index: usize) -> Result<Turn, SessionError> {
        if self.status.is_terminal() {
            warn!("Move attempted after game ended");
            return Err(SessionError::GameOver(self.status));
        }

        let position = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Cell index out of range");
            SessionError::InvalidIndex(index)
        })?;

        let before = self.board.clone();
        if apply_move(&mut self.board, Move::new(Mark::X, position))? {
            return Ok(self.finish(MoveOutcome::PlayerWon, None));
        }

        let Some(reply) = self.opponent.choose_move(&self.board) else {
            debug!("No square left for the opponent");
            return Ok(self.finish(MoveOutcome::Draw, None));
        };

        let reply = Move::new(Mark::O, reply);
        let won = match apply_move(&mut self.board, reply) {
            Ok(won) => won,
            Err(e) => {
                warn!(%reply, error = %e, "Opponent chose a marked square, turn rolled back");
                self.board = before;
                return Err(SessionError::OpponentMove(e));
            }
        };
        debug!(%reply, won, "Opponent replied");

        let outcome = if won {
            MoveOutcome::OpponentWon
        } else if is_full(&self.board) {
            // Only reachable from a restored position with O to move last
            MoveOutcome::Draw
        } else {
            MoveOutcome::Continue
        };
        Ok(self.finish(outcome, Some(reply)))
    }

    /// Records the outcome of a turn.
    fn finish(&mut self, outcome: MoveOutcome, opponent_move: Option<Move>) -> Turn {
        self.status = outcome.into();
        if outcome.is_terminal() {
            info!(%outcome, "Game over");
        }
        Turn {
            outcome,
            opponent_move,
        }
    }

    /// Hands the current board to the store.
    ///
    /// # Errors
    ///
    /// Returns the store's [`StoreError`] unchanged.
    #[instrument(skip(self))]
    pub fn save(&mut self) -> Result<(), StoreError> {
        self.store.store(self.board.squares())?;
        info!("Game saved");
        Ok(())
    }

    /// Replaces the board with the saved one.
    ///
    /// Any nine squares are accepted as they are, even positions alternating
    /// play could not reach. A missing save, a save of the wrong length, or a
    /// load failure all start a fresh game instead of failing.
    #[instrument(skip(self))]
    pub fn restore(&mut self) -> RestoreOutcome {
        let squares = match self.store.load() {
            Ok(Some(squares)) => squares,
            Ok(None) => {
                info!("No saved game, starting fresh");
                self.new_game();
                return RestoreOutcome::StartedFresh;
            }
            Err(e) => {
                warn!(error = %e, "Failed to load saved game, starting fresh");
                self.new_game();
                return RestoreOutcome::StartedFresh;
            }
        };

        let Some(board) = Board::from_slice(&squares) else {
            warn!(len = squares.len(), "Saved game is not nine cells, starting fresh");
            self.new_game();
            return RestoreOutcome::StartedFresh;
        };

        let balanced = board.is_balanced();
        self.status = status_of(&board);
        self.board = board;
        info!(balanced, status = %self.status, "Saved game restored");
        RestoreOutcome::Restored
    }
}

/// Derives the status a restored board is in.
fn status_of(board: &Board) -> GameStatus {
    let outcome = match check_winner(board) {
        Some(mark) => MoveOutcome::won_by(mark),
        None if is_full(board) => MoveOutcome::Draw,
        None => MoveOutcome::Continue,
    };
    outcome.into()
}
