//! Game configuration.

use crate::error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a game.
///
/// The default places no limit on frame positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Highest frame position accepted by [`crate::Game::roll`].
    #[serde(default)]
    frame_limit: Option<u32>,
}

impl GameConfig {
    /// Creates a configuration with an optional frame limit.
    #[instrument]
    pub fn new(frame_limit: Option<u32>) -> Self {
        Self { frame_limit }
    }

    /// Configuration accepting frames `1..=10`.
    #[instrument]
    pub fn ten_frames() -> Self {
        Self::new(Some(10))
    }

    /// Returns true if `position` may be rolled into.
    pub fn allows(&self, position: u32) -> bool {
        match self.frame_limit {
            Some(limit) => (1..=limit).contains(&position),
            None => true,
        }
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(frame_limit = ?config.frame_limit, "Config parsed");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(frame_limit = ?config.frame_limit, "Config loaded successfully");
        Ok(config)
    }
}
