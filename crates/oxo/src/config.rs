//! Game configuration: where and how saved games are kept.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{BoardStore, FileStore, SqliteStore};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "OXO_CONFIG";

/// Which persistence backend to use.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StoreBackend {
    /// JSON document on disk.
    #[default]
    File,
    /// SQLite database.
    Sqlite,
}

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct OxoConfig {
    /// Persistence backend.
    #[serde(default)]
    backend: StoreBackend,

    /// Save file (or database) path.
    #[serde(default = "default_save_path")]
    save_path: PathBuf,

    /// Seed for the opponent; random when absent.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_save_path() -> PathBuf {
    PathBuf::from("oxogame.json")
}

impl Default for OxoConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            save_path: default_save_path(),
            seed: None,
        }
    }
}

impl OxoConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(backend = %config.backend, save_path = %config.save_path.display(), "Config loaded");
        Ok(config)
    }

    /// Loads the file named by `path`, falling back to [`CONFIG_ENV`] and
    /// then to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a named file cannot be loaded.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(PathBuf::from(path)),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the backend.
    pub fn with_backend(mut self, backend: StoreBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Overrides the save path.
    pub fn with_save_path(mut self, save_path: PathBuf) -> Self {
        self.save_path = save_path;
        self
    }

    /// Overrides the opponent seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configured store.
    #[instrument(skip(self), fields(backend = %self.backend))]
    pub fn open_store(&self) -> Box<dyn BoardStore> {
        match self.backend {
            StoreBackend::File => Box::new(FileStore::new(&self.save_path)),
            StoreBackend::Sqlite => {
                Box::new(SqliteStore::new(self.save_path.display().to_string()))
            }
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
