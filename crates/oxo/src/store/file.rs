//! JSON file store.

use super::BoardStore;
use crate::StoreError;
use derive_getters::Getters;
use oxo_tictactoe::Square;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// On-disk save document.
///
/// Squares are kept as a list rather than a fixed array so a truncated or
/// hand-edited file still parses and the session can decide what to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SavedGame {
    squares: Vec<Square>,
}

impl SavedGame {
    /// Wraps the given squares.
    pub fn new(squares: Vec<Square>) -> Self {
        Self { squares }
    }
}

/// Saves the board as a JSON document at a fixed path.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store writing to `path`. Nothing is touched until a save.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the save file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BoardStore for FileStore {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn store(&mut self, squares: &[Square; 9]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&SavedGame::new(squares.to_vec()))?;
        std::fs::write(&self.path, json)?;
        info!("Game saved to file");
        Ok(())
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn load(&mut self) -> Result<Option<Vec<Square>>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No save file present");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let saved: SavedGame = serde_json::from_str(&content)?;
        debug!(len = saved.squares.len(), "Save file loaded");
        Ok(Some(saved.squares))
    }
}
