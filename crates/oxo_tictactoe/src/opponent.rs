//! The automated opponent.
//!
//! The opponent plays uniformly at random among the empty squares. The
//! random source is injected so a session can be replayed from a seed.

use super::{Board, Position};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Picks a uniformly random empty position.
///
/// Empty squares are re-scanned on every call. Returns `None` when the
/// board is full.
#[instrument(skip(rng))]
pub fn choose_automated_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let choice = board.empty_positions().choose(rng).copied();
    debug!(?choice, "Automated move chosen");
    choice
}

/// A strategy that selects the opponent's reply.
pub trait Opponent {
    /// Chooses an empty position, or `None` if no move is available.
    fn choose_move(&mut self, board: &Board) -> Option<Position>;
}

impl<O: Opponent + ?Sized> Opponent for Box<O> {
    fn choose_move(&mut self, board: &Board) -> Option<Position> {
        (**self).choose_move(board)
    }
}

/// Opponent that plays uniformly at random.
#[derive(Debug, Clone)]
pub struct RandomOpponent<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomOpponent<R> {
    /// Creates an opponent drawing from the given random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomOpponent<StdRng> {
    /// Creates an opponent with a reproducible sequence of choices.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates an opponent seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> Opponent for RandomOpponent<R> {
    fn choose_move(&mut self, board: &Board) -> Option<Position> {
        choose_automated_move(board, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Square};
    use std::collections::HashSet;

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_squares([Square::Occupied(Mark::O); 9]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(choose_automated_move(&board, &mut rng), None);
    }

    #[test]
    fn test_single_gap_is_always_chosen() {
        let mut squares = [Square::Occupied(Mark::X); 9];
        squares[5] = Square::Empty;
        let board = Board::from_squares(squares);

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(
                choose_automated_move(&board, &mut rng),
                Some(Position::MiddleRight)
            );
        }
    }

    #[test]
    fn test_choices_are_empty_and_cover_board() {
        let mut squares = [Square::Empty; 9];
        squares[0] = Square::Occupied(Mark::X);
        let board = Board::from_squares(squares);

        let mut opponent = RandomOpponent::seeded(3);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let pos = opponent.choose_move(&board).expect("board has room");
            assert!(board.is_empty(pos));
            seen.insert(pos);
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomOpponent::seeded(99);
        let mut b = RandomOpponent::seeded(99);
        for _ in 0..20 {
            assert_eq!(a.choose_move(&board), b.choose_move(&board));
        }
    }
}
