//! File-based configuration for the command-line front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings read from `strictly_games.toml`.
///
/// Every field has a default, so a missing file or a partial file is fine.
/// Command-line flags override these values.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Whether the human moves first in `play`.
    #[serde(default)]
    human_first: bool,

    /// Random restarts per local-search experiment.
    #[serde(default = "default_iterations")]
    iterations: usize,

    /// Seed for reproducible experiments; random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Random blank moves used to scramble each 8-puzzle start.
    #[serde(default = "default_scramble_moves")]
    scramble_moves: usize,

    /// Missionaries in the river-crossing puzzle.
    #[serde(default = "default_head_count")]
    missionaries: u8,

    /// Cannibals in the river-crossing puzzle.
    #[serde(default = "default_head_count")]
    cannibals: u8,
}

fn default_log_filter() -> String {
    "warn,strictly_games=info".to_string()
}

fn default_iterations() -> usize {
    1000
}

fn default_scramble_moves() -> usize {
    strictly_puzzles::eight_puzzle::DEFAULT_SCRAMBLE_MOVES
}

fn default_head_count() -> u8 {
    3
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            human_first: false,
            iterations: default_iterations(),
            seed: None,
            scramble_moves: default_scramble_moves(),
            missionaries: default_head_count(),
            cannibals: default_head_count(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(iterations = config.iterations, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.display(), "Config file not found, using defaults");
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: AppConfig = toml::from_str("iterations = 25\nseed = 4").unwrap();
        assert_eq!(*config.iterations(), 25);
        assert_eq!(*config.seed(), Some(4));
        assert_eq!(*config.missionaries(), 3);
        assert!(!config.human_first());
        assert_eq!(config.log_filter(), &default_log_filter());
    }

    #[test]
    fn test_empty_file_matches_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
