//! Database models for saved games.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use oxo_tictactoe::Square;
use tracing::instrument;

use crate::StoreError;
use crate::db::schema;

/// A saved board row.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::saved_games)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SavedGameRow {
    id: i32,
    cells: String,
    saved_at: NaiveDateTime,
}

impl SavedGameRow {
    /// Decodes the stored cell string, one character per square.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if a character is not `'X'`, `'O'` or `' '`.
    #[instrument(skip(self), fields(id = self.id))]
    pub fn squares(&self) -> Result<Vec<Square>, StoreError> {
        self.cells
            .chars()
            .map(|c| Square::try_from(c).map_err(|e| StoreError::new(e.to_string())))
            .collect()
    }
}

/// Insertable row for a new save.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::saved_games)]
pub struct NewSavedGame {
    cells: String,
}

impl NewSavedGame {
    /// Encodes the squares as a nine-character string.
    pub fn from_squares(squares: &[Square; 9]) -> Self {
        Self::new(squares.iter().map(|s| s.as_char()).collect())
    }
}
