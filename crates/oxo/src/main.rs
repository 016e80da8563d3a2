//! oxo - play tic-tac-toe from the terminal.

use anyhow::Result;
use clap::Parser;
use oxo::{Cli, Driver, OxoConfig, Session};
use oxo_tictactoe::RandomOpponent;
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    run(&cli, &config)
}

/// Merges the config file with command-line overrides.
#[instrument(skip(cli))]
fn resolve_config(cli: &Cli) -> Result<OxoConfig> {
    let mut config = OxoConfig::load(cli.config.as_deref())?;
    if let Some(backend) = cli.backend {
        config = config.with_backend(backend);
    }
    if let Some(path) = &cli.save_path {
        config = config.with_save_path(path.clone());
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

/// Builds the session and hands it to the driver.
#[instrument(skip(cli))]
fn run(cli: &Cli, config: &OxoConfig) -> Result<()> {
    let opponent = match config.seed() {
        Some(seed) => RandomOpponent::seeded(*seed),
        None => RandomOpponent::from_os_rng(),
    };
    let session = Session::new(config.open_store(), opponent);

    let stdin = io::stdin();
    let mut driver = Driver::new(session, stdin.lock(), io::stdout());

    info!(new = cli.new, restore = cli.restore, "Starting oxo");
    if cli.new {
        driver.play()?;
    } else if cli.restore {
        driver.resume()?;
        driver.play()?;
    } else {
        driver.run_menu()?;
    }
    Ok(())
}
