//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::{DEFAULT_DIMENSION, MAX_DIMENSION};
use tracing::{debug, info, instrument, warn};

/// Settings for a console game session.
///
/// Every field has a default, so a TOML file only needs the keys it
/// changes:
///
/// ```toml
/// dimension = 4
/// icons = ["#", "@"]
/// rematch = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board side length.
    dimension: usize,

    /// Icons for player 1 and player 2.
    icons: [String; 2],

    /// Player names; prompted for when absent.
    player_names: Option<[String; 2]>,

    /// Offer another round after each game.
    rematch: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            icons: ["X".to_string(), "O".to_string()],
            player_names: None,
            rematch: false,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(dimension = config.dimension, "Config loaded successfully");
        Ok(config)
    }

    /// Sets the board side length.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Sets both icons.
    pub fn with_icons(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.icons = [first.into(), second.into()];
        self
    }

    /// Sets both player names, skipping the name prompts.
    pub fn with_player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.player_names = Some([first.into(), second.into()]);
        self
    }

    /// Enables or disables the rematch question.
    pub fn with_rematch(mut self, rematch: bool) -> Self {
        self.rematch = rematch;
        self
    }

    /// Rejects settings that cannot produce a playable game.
    #[instrument(skip(self), fields(dimension = self.dimension))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension == 0 {
            return Err(ConfigError::new("dimension must be at least 1".to_string()));
        }
        if self.dimension > MAX_DIMENSION {
            return Err(ConfigError::new(format!(
                "dimension {} exceeds the maximum of {}",
                self.dimension, MAX_DIMENSION
            )));
        }
        if self.icons.iter().any(|icon| icon.trim().is_empty()) {
            return Err(ConfigError::new("icons must not be blank".to_string()));
        }
        if self.icons[0] == self.icons[1] {
            warn!(icon = %self.icons[0], "Both players share an icon");
        }
        Ok(())
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
