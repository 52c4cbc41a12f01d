//! Command-line interface for the tictactoe binary.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_console::GameConfig;
use tracing::{debug, instrument};

/// Two-player tic-tac-toe on an N×N board, played in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player N×N tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (skipped if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Board side length
    #[arg(short, long)]
    pub dimension: Option<usize>,

    /// Icons for player 1 and player 2
    #[arg(long, num_args = 2, value_names = ["FIRST", "SECOND"])]
    pub icons: Option<Vec<String>>,

    /// Names for player 1 and player 2 (skips the name prompts)
    #[arg(long, num_args = 2, value_names = ["FIRST", "SECOND"])]
    pub names: Option<Vec<String>>,

    /// Offer a rematch after each game
    #[arg(long)]
    pub rematch: bool,
}

impl Cli {
    /// Applies command-line overrides on top of `config`.
    #[instrument(skip(config))]
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(dimension) = self.dimension {
            config = config.with_dimension(dimension);
        }
        if let Some([first, second]) = self.icons.as_deref() {
            config = config.with_icons(first, second);
        }
        if let Some([first, second]) = self.names.as_deref() {
            config = config.with_player_names(first, second);
        }
        if self.rematch {
            config = config.with_rematch(true);
        }
        debug!(?config, "Effective configuration");
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_leave_config_alone() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert_eq!(cli.apply(GameConfig::default()), GameConfig::default());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "tictactoe", "-d", "4", "--icons", "A", "B", "--names", "Ann", "Ben", "--rematch",
        ]);
        let config = cli.apply(GameConfig::default().with_icons("#", "@"));
        assert_eq!(
            config,
            GameConfig::default()
                .with_dimension(4)
                .with_icons("A", "B")
                .with_player_names("Ann", "Ben")
                .with_rematch(true)
        );
    }

    #[test]
    fn test_icons_need_two_values() {
        assert!(Cli::try_parse_from(["tictactoe", "--icons", "A"]).is_err());
    }
}
