//! In-process store.

use super::BoardStore;
use crate::StoreError;
use oxo_tictactoe::Square;
use tracing::{debug, instrument};

/// Keeps the saved board in memory.
///
/// Useful as a test double; [`MemoryStore::with_saved`] seeds arbitrary
/// data, including sequences of the wrong length.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<Vec<Square>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds the given squares.
    pub fn with_saved(squares: Vec<Square>) -> Self {
        Self {
            saved: Some(squares),
        }
    }

    /// Returns the currently saved squares.
    pub fn saved(&self) -> Option<&[Square]> {
        self.saved.as_deref()
    }
}

impl BoardStore for MemoryStore {
    #[instrument(skip_all)]
    fn store(&mut self, squares: &[Square; 9]) -> Result<(), StoreError> {
        debug!("Saving board in memory");
        self.saved = Some(squares.to_vec());
        Ok(())
    }

    #[instrument(skip_all)]
    fn load(&mut self) -> Result<Option<Vec<Square>>, StoreError> {
        debug!(has_save = self.saved.is_some(), "Loading board from memory");
        Ok(self.saved.clone())
    }
}
