//! tictactoe - two-player N×N tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tictactoe_console::{GameConfig, GameSession};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;
    config.validate()?;

    info!("Starting tictactoe session");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = GameSession::new(config, stdin.lock(), stdout.lock());
    session.run()?;

    Ok(())
}

/// Reads the config file if present, then applies command-line overrides.
#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let config = if cli.config.exists() {
        GameConfig::from_file(&cli.config)?
    } else {
        info!("Config file not found, using defaults");
        GameConfig::default()
    };
    Ok(cli.apply(config))
}
