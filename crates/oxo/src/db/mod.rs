//! SQLite persistence for saved games.

mod models;
mod repository;
mod schema; // Diesel schema - internal use only

pub use models::{NewSavedGame, SavedGameRow};
pub use repository::SqliteStore;
