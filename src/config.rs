//! Session defaults loaded from TOML.

use crate::view::SortOrder;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use timeline_core::BoardSize;
use tracing::{debug, info, instrument};

/// Defaults for new sessions and the replay binary.
///
/// ```toml
/// board_size = 4
/// sort_order = "descending"
/// log_filter = "info,timeline_core=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineConfig {
    /// Side length of the first board.
    #[serde(default)]
    board_size: BoardSize,

    /// Initial move-list order.
    #[serde(default)]
    sort_order: SortOrder,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default(),
            sort_order: SortOrder::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl TimelineConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(board_size = %config.board_size, sort_order = %config.sort_order, "Config parsed");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(board_size = %config.board_size, "Config loaded successfully");
        Ok(config)
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
    fn test_empty_toml_uses_defaults() {
        let config = TimelineConfig::from_toml("").unwrap();
        assert_eq!(config, TimelineConfig::default());
        assert_eq!(config.board_size().get(), 3);
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_parses_all_fields() {
        let config = TimelineConfig::from_toml(
            "board_size = 5\nsort_order = \"descending\"\nlog_filter = \"debug\"\n",
        )
        .unwrap();
        assert_eq!(config.board_size().get(), 5);
        assert_eq!(*config.sort_order(), SortOrder::Descending);
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_rejects_non_positive_size() {
        let err = TimelineConfig::from_toml("board_size = 0").unwrap_err();
        assert!(err.message.contains("Invalid board size 0"), "{}", err);
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(TimelineConfig::from_toml("board = 3").is_err());
    }
}
