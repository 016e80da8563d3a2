//! oxo - tic-tac-toe against a random opponent
//!
//! # Architecture
//!
//! - **Session**: the player's move followed by the opponent's reply,
//!   with save and restore hooks
//! - **Store**: persistence collaborators (memory, JSON file, SQLite)
//! - **Driver**: the text menu and play loop used by the binary
//!
//! The board and its rules live in [`oxo_tictactoe`].
//!
//! # Example
//!
//! ```
//! use oxo::{MemoryStore, Session};
//! use oxo_tictactoe::{MoveOutcome, RandomOpponent};
//!
//! let mut session = Session::new(MemoryStore::new(), RandomOpponent::seeded(7));
//! let turn = session.player_move(4)?;
//! assert_eq!(turn.outcome(), MoveOutcome::Continue);
//! # Ok::<(), oxo::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod db;
mod driver;
mod error;
mod session;
mod store;

// Crate-level exports - Command line
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{CONFIG_ENV, ConfigError, OxoConfig, StoreBackend};

// Crate-level exports - Persistence
pub use db::{NewSavedGame, SavedGameRow, SqliteStore};
pub use store::{BoardStore, FileStore, MemoryStore, SavedGame};

// Crate-level exports - Errors
pub use error::{SessionError, StoreError};

// Crate-level exports - Session management
pub use session::{RestoreOutcome, Session, Turn};

// Crate-level exports - Driver
pub use driver::{Driver, MENU, MenuChoice, PlayEnd};
