//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Tunables for a game session and its data source.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Maximum number of guesses per session.
    attempt_limit: NonZeroU32,

    /// How many creatures the roster listing requests.
    roster_limit: u32,

    /// Base URL of the creature API, with trailing slash.
    api_base_url: String,

    /// Base URL for sprite images, `<id>.png` is appended.
    sprite_base_url: String,

    /// Maximum suggestions offered for an input prefix.
    suggestion_limit: usize,
}

#[instrument]
fn default_attempt_limit() -> NonZeroU32 {
    NonZeroU32::MIN.saturating_add(9)
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            attempt_limit: default_attempt_limit(),
            roster_limit: 251,
            api_base_url: "https://pokeapi.co/api/v2/".to_string(),
            sprite_base_url:
                "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/"
                    .to_string(),
            suggestion_limit: 5,
        }
    }
}

impl GameConfig {
    /// Overrides the attempt limit.
    pub fn with_attempt_limit(mut self, attempt_limit: NonZeroU32) -> Self {
        self.attempt_limit = attempt_limit;
        self
    }

    /// Loads configuration from TOML file. Absent keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            attempt_limit = config.attempt_limit.get(),
            roster_limit = config.roster_limit,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
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
