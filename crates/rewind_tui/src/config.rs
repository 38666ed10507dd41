//! Configuration for the terminal front-end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::BoardSize;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Board size for new games.
    #[serde(default)]
    board_size: BoardSize,

    /// Where logs are written (stdout belongs to the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("rewind.log")
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(board_size = %config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        size: Option<usize>,
        log_file: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(side) = size {
            self.board_size = BoardSize::new(side)
                .map_err(|e| ConfigError::new(format!("Invalid --size: {}", e)))?;
        }
        if let Some(path) = log_file {
            self.log_file = path;
        }
        Ok(self)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TuiConfig::default();
        assert_eq!(config.board_size().side(), 3);
        assert_eq!(config.log_file(), &PathBuf::from("rewind.log"));
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: TuiConfig = toml::from_str("board_size = 5").expect("valid toml");
        assert_eq!(config.board_size().side(), 5);
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_invalid_board_size_in_toml() {
        assert!(toml::from_str::<TuiConfig>("board_size = 0").is_err());
    }

    #[test]
    fn test_overrides() {
        let config = TuiConfig::default()
            .with_overrides(Some(4), Some(PathBuf::from("other.log")))
            .expect("valid overrides");
        assert_eq!(config.board_size().side(), 4);
        assert_eq!(config.log_file(), &PathBuf::from("other.log"));
    }

    #[test]
    fn test_invalid_size_override() {
        let err = TuiConfig::default()
            .with_overrides(Some(0), None)
            .expect_err("zero is not a board");
        assert!(err.message.contains("Invalid --size"));
    }
}
