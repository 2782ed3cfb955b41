//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name shown for the player who starts as X.
    #[serde(default = "default_first_player")]
    first_player: String,

    /// Name shown for the player who starts as O.
    #[serde(default = "default_second_player")]
    second_player: String,

    /// Ring the terminal bell when a game ends.
    #[serde(default = "default_sound")]
    sound: bool,
}

#[instrument]
fn default_first_player() -> String {
    "Player 1".to_string()
}

#[instrument]
fn default_second_player() -> String {
    "Player 2".to_string()
}

#[instrument]
fn default_sound() -> bool {
    true
}

impl GameConfig {
    /// Creates a configuration.
    #[instrument(skip(first_player, second_player))]
    pub fn new(first_player: String, second_player: String, sound: bool) -> Self {
        Self {
            first_player,
            second_player,
            sound,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            first = %config.first_player,
            second = %config.second_player,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Turns the bell off regardless of the file.
    pub fn muted(mut self) -> Self {
        self.sound = false;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_first_player(), default_second_player(), default_sound())
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
    /// Creates a new configuration error with caller location tracking.
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
