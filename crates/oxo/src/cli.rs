//! Command-line interface for oxo.

use crate::StoreBackend;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Play tic-tac-toe against a random opponent
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Play a game of Tic-Tac-Toe", long_about = None)]
#[command(version)]
#[command(group(ArgGroup::new("start").args(["new", "restore"])))]
pub struct Cli {
    /// Start a new game, skipping the menu
    #[arg(short, long)]
    pub new: bool,

    /// Restore the saved game, skipping the menu
    #[arg(short, long, visible_alias = "res")]
    pub restore: bool,

    /// Path to a TOML config file (defaults to $OXO_CONFIG)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Persistence backend
    #[arg(long, value_enum)]
    pub backend: Option<StoreBackend>,

    /// Save file or database path
    #[arg(long)]
    pub save_path: Option<PathBuf>,

    /// Seed for the opponent's moves
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_restore_are_exclusive() {
        assert!(Cli::try_parse_from(["oxo", "--new", "--restore"]).is_err());
    }

    #[test]
    fn test_restore_alias_and_overrides() {
        let cli = Cli::try_parse_from([
            "oxo",
            "--res",
            "--backend",
            "sqlite",
            "--save-path",
            "games.db",
            "--seed",
            "9",
        ])
        .unwrap();
        assert!(cli.restore);
        assert!(!cli.new);
        assert_eq!(cli.backend, Some(StoreBackend::Sqlite));
        assert_eq!(cli.save_path, Some(PathBuf::from("games.db")));
        assert_eq!(cli.seed, Some(9));
    }
}
