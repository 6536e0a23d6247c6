//! Log output settings.
//!
//! The terminal is owned by the UI, so logs only go to a file. With no
//! `file` set, logging stays off.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Accepted values for [`LoggingConfig::level`].
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Logging configuration.
///
/// # Examples
///
/// ```
/// use pipeboard_config::LoggingConfig;
///
/// let config = LoggingConfig::default();
/// assert_eq!(config.level, "info");
/// assert!(!config.is_enabled());
///
/// let config = LoggingConfig::to_file("pipeboard.log");
/// assert!(config.is_enabled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level written to the log.
    #[serde(default = "default_level")]
    pub level: String,

    /// File the log is appended to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Creates a configuration logging at the default level to `path`.
    #[must_use]
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self {
            level: default_level(),
            file: Some(path.into()),
        }
    }

    /// Returns `true` if a log file is configured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Checks that `level` is a known level. Matching is case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] for anything else.
    pub fn validate(&self) -> Result<()> {
        let level = self.level.to_ascii_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidLogLevel(self.level.clone()))
        }
    }
}
