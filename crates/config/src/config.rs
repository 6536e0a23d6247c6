//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the pipeboard application.

use pipeboard_protocol::ViewerContext;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::logging::LoggingConfig;
use crate::persistence::{
    find_config_file, read_config_file, read_config_file_async, write_config_file,
};
use crate::source::SourceConfig;

/// The main configuration struct for the pipeboard application.
///
/// # Examples
///
/// ```
/// use pipeboard_config::{Config, SourceConfig};
/// use pipeboard_protocol::ViewerContext;
///
/// // Create a default config
/// let config = Config::default();
/// assert!(config.source.snapshot_path.is_none());
///
/// // Create a custom config
/// let config = Config {
///     source: SourceConfig::from_file("applications.json5"),
///     viewer: ViewerContext::new("Sam").with_enterprise("Acme Corp"),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where the board is loaded from and how it is paged.
    #[serde(default)]
    pub source: SourceConfig,

    /// Who is looking at the board.
    #[serde(default)]
    pub viewer: ViewerContext,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./pipeboard.json5` or `./pipeboard.json`
    /// 2. User: `~/.config/pipeboard/config.json5` or `~/.config/pipeboard/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pipeboard_config::Config;
    ///
    /// # async fn example() -> pipeboard_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("Viewing as {}", config.viewer.display_label());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => {
                let config: Config = read_config_file_async(&path).await?;
                config.validate()?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pipeboard_config::Config;
    ///
    /// # fn example() -> pipeboard_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the page size is out of range or the log level
    /// is unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipeboard_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.source.page_size = 0;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.source.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Returns whether the board comes from a page file rather than the demo
    /// pipeline.
    #[must_use]
    pub fn uses_snapshot_file(&self) -> bool {
        self.source.snapshot_path.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::error::ConfigError;
    use pipeboard_protocol::SortOrder;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(!config.uses_snapshot_file());
        assert_eq!(config.viewer.display_label(), "guest");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn new_config() {
        assert_eq!(Config::new(), Config::default());
    }

    #[test]
    fn validate_invalid_page_size() {
        let mut config = Config::default();
        config.source.page_size = 500;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSource { .. })
        ));
    }

    #[test]
    fn validate_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_partial() {
        let json = r#"{"viewer": {"name": "Sam"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.viewer.name, "Sam");
        assert!(config.viewer.enterprise.is_none());
        assert_eq!(config.source, SourceConfig::default());
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(
            &path,
            r#"
            {
                source: {
                    snapshot_path: "applications.json5",
                    page_size: 10,
                    order: "oldest",
                },
                viewer: { name: "Sam", enterprise: "Acme Corp" },
                logging: { level: "debug", file: "pipeboard.log" },
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config.source.snapshot_path,
            Some(PathBuf::from("applications.json5"))
        );
        assert_eq!(config.source.page_size, 10);
        assert_eq!(config.source.order, SortOrder::Oldest);
        assert_eq!(config.viewer.display_label(), "Sam @ Acme Corp");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.is_enabled());
    }

    #[test]
    fn load_from_file_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"source": {"page_size": 0}}"#).unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let original = Config {
            source: SourceConfig::from_file("board.json"),
            viewer: ViewerContext::new("Sam"),
            logging: LoggingConfig::to_file("pipeboard.log"),
        };

        original.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(original, loaded);
    }
}
