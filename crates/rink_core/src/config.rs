//! Tracker configuration.
//!
//! Loaded from a JSON file whose path is given by `RINK_CONFIG_PATH`. Missing
//! keys fall back to their defaults, so `{}` is a valid config.

use std::path::Path;
use std::{env, fs};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::REGULATION_PERIODS;

pub const CONFIG_PATH_ENV: &str = "RINK_CONFIG_PATH";

pub const DEFAULT_RECENT_GAMES_LIMIT: usize = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TrackerConfig {
    /// How many games the landing page lists.
    pub recent_games_limit: usize,
    /// Periods before overtime numbering starts.
    pub regulation_periods: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            recent_games_limit: DEFAULT_RECENT_GAMES_LIMIT,
            regulation_periods: REGULATION_PERIODS,
        }
    }
}

impl TrackerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: TrackerConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TrackerConfig = serde_json::from_str(json).map_err(|source| {
            ConfigError::Parse { path: "<inline>".to_string(), source }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults unless `RINK_CONFIG_PATH` names a file.
    pub fn from_env() -> Result<Self, ConfigError> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        tracing::debug!(env = CONFIG_PATH_ENV, path, "loading tracker config");
        Self::load(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recent_games_limit == 0 {
            return Err(ConfigError::Invalid(
                "recent_games_limit must be at least 1".to_string(),
            ));
        }
        if self.regulation_periods == 0 {
            return Err(ConfigError::Invalid(
                "regulation_periods must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
