//! SQLite-backed board store.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use oxo_tictactoe::Square;
use tracing::{debug, info, instrument};

use crate::db::{NewSavedGame, SavedGameRow, schema};
use crate::{BoardStore, StoreError};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Keeps every save as a row; loading returns the newest one.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: String,
}

impl SqliteStore {
    /// Creates a store for the database at the given path.
    ///
    /// The schema is created on first connection.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Self {
        info!(path = %db_path, "Creating SqliteStore");
        Self { db_path }
    }

    /// Establishes a connection and applies pending migrations.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, StoreError> {
        debug!(path = %self.db_path, "Establishing connection");
        let mut conn = SqliteConnection::establish(&self.db_path).map_err(|e| {
            StoreError::new(format!("Failed to connect to '{}': {}", self.db_path, e))
        })?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::new(format!("Migration failed: {}", e)))?;
        Ok(conn)
    }

    /// Number of saves recorded so far.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn save_count(&self) -> Result<i64, StoreError> {
        let mut conn = self.connection()?;
        let count = schema::saved_games::table.count().get_result(&mut conn)?;
        Ok(count)
    }
}

impl BoardStore for SqliteStore {
    #[instrument(skip_all, fields(db_path = %self.db_path))]
    fn store(&mut self, squares: &[Square; 9]) -> Result<(), StoreError> {
        let mut conn = self.connection()?;
        let row = NewSavedGame::from_squares(squares);

        diesel::insert_into(schema::saved_games::table)
            .values(&row)
            .execute(&mut conn)?;

        info!(cells = %row.cells(), "Game saved to database");
        Ok(())
    }

    #[instrument(skip_all, fields(db_path = %self.db_path))]
    fn load(&mut self) -> Result<Option<Vec<Square>>, StoreError> {
        let mut conn = self.connection()?;

        let row = schema::saved_games::table
            .order(schema::saved_games::id.desc())
            .select(SavedGameRow::as_select())
            .first::<SavedGameRow>(&mut conn)
            .optional()?;

        match row {
            Some(row) => {
                debug!(id = row.id(), saved_at = %row.saved_at(), "Latest save found");
                row.squares().map(Some)
            }
            None => {
                debug!("No saved game in database");
                Ok(None)
            }
        }
    }
}
