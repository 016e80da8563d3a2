//! Persistence collaborators for saved games.
//!
//! A [`BoardStore`] keeps one saved board. The session hands it the nine
//! squares on save and asks for them back on restore; the physical format
//! belongs to each implementation.

mod file;
mod memory;

pub use file::{FileStore, SavedGame};
pub use memory::MemoryStore;

use crate::StoreError;
use oxo_tictactoe::Square;

/// Storage for a saved board.
pub trait BoardStore {
    /// Saves the squares, replacing any previous save.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot write.
    fn store(&mut self, squares: &[Square; 9]) -> Result<(), StoreError>;

    /// Loads the most recent save, or `None` if nothing has been saved.
    ///
    /// The returned sequence is not guaranteed to hold nine squares; callers
    /// must check.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be read or the saved
    /// data is corrupt.
    fn load(&mut self) -> Result<Option<Vec<Square>>, StoreError>;
}

impl<S: BoardStore + ?Sized> BoardStore for Box<S> {
    fn store(&mut self, squares: &[Square; 9]) -> Result<(), StoreError> {
        (**self).store(squares)
    }

    fn load(&mut self) -> Result<Option<Vec<Square>>, StoreError> {
        (**self).load()
    }
}
