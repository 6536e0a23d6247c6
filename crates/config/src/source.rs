//! Snapshot source settings.
//!
//! Selects where the board comes from and how it is paged. Without a
//! `snapshot_path` the built-in demo pipeline is shown.

use std::path::PathBuf;

use pipeboard_protocol::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest, SortOrder};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Where to load applications from, and how many per page.
///
/// # Examples
///
/// ```
/// use pipeboard_config::SourceConfig;
/// use pipeboard_protocol::SortOrder;
///
/// let config = SourceConfig::default();
/// assert!(config.snapshot_path.is_none());
/// assert_eq!(config.page_size, 20);
/// assert_eq!(config.order, SortOrder::Newest);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// JSON or JSON5 page file. `None` selects the demo pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<PathBuf>,

    /// Cards per column on one page, `1..=100`.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Initial listing order.
    #[serde(default)]
    pub order: SortOrder,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            order: SortOrder::default(),
        }
    }
}

impl SourceConfig {
    /// Creates settings reading from a page file.
    #[must_use]
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            snapshot_path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Validates the page size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSource`] if `page_size` is zero or
    /// above [`MAX_PAGE_SIZE`].
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidSource {
                reason: format!(
                    "page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                    self.page_size
                ),
            });
        }
        Ok(())
    }

    /// Returns the request for the first page.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings do not validate.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipeboard_config::SourceConfig;
    ///
    /// let request = SourceConfig::default().first_page().unwrap();
    /// assert_eq!(request.page, 1);
    /// assert_eq!(request.page_size, 20);
    /// ```
    pub fn first_page(&self) -> Result<PageRequest> {
        PageRequest::new(1, self.page_size, self.order).map_err(|e| ConfigError::InvalidSource {
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(SourceConfig::default().validate().is_ok());
    }

    #[test]
    fn page_size_bounds() {
        let mut config = SourceConfig::default();

        config.page_size = 0;
        assert!(config.validate().is_err());
        assert!(config.first_page().is_err());

        config.page_size = MAX_PAGE_SIZE;
        assert!(config.validate().is_ok());

        config.page_size = MAX_PAGE_SIZE + 1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("page_size"));
    }

    #[test]
    fn from_file_keeps_defaults() {
        let config = SourceConfig::from_file("board.json5");
        assert_eq!(config.snapshot_path, Some(PathBuf::from("board.json5")));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn deserialize_order() {
        let config: SourceConfig = serde_json::from_str(r#"{"order": "oldest"}"#).unwrap();
        assert_eq!(config.order, SortOrder::Oldest);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn snapshot_path_not_serialized_when_none() {
        let json = serde_json::to_string(&SourceConfig::default()).unwrap();
        assert!(!json.contains("snapshot_path"));
    }
}
