//! Identity of the person looking at the board.
//!
//! The viewer context is read-only and passed explicitly to whatever needs
//! it, instead of living in ambient global state.

use serde::{Deserialize, Serialize};

/// The current user and, for employer accounts, their enterprise.
///
/// # Examples
///
/// ```
/// use pipeboard_protocol::ViewerContext;
///
/// let viewer = ViewerContext::new("Sam").with_enterprise("Acme Corp");
/// assert_eq!(viewer.display_label(), "Sam @ Acme Corp");
///
/// let anonymous = ViewerContext::default();
/// assert_eq!(anonymous.display_label(), "guest");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerContext {
    /// Display name of the current user.
    #[serde(default)]
    pub name: String,
    /// Enterprise the user recruits for, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enterprise: Option<String>,
}

impl ViewerContext {
    /// Creates a viewer context without an enterprise.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enterprise: None,
        }
    }

    /// Sets the enterprise.
    #[must_use]
    pub fn with_enterprise(mut self, enterprise: impl Into<String>) -> Self {
        self.enterprise = Some(enterprise.into());
        self
    }

    /// Returns the label shown in the header.
    #[must_use]
    pub fn display_label(&self) -> String {
        let name = if self.name.trim().is_empty() {
            "guest"
        } else {
            self.name.trim()
        };
        match &self.enterprise {
            Some(enterprise) if !enterprise.trim().is_empty() => {
                format!("{name} @ {}", enterprise.trim())
            }
            _ => name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_enterprise_is_ignored() {
        let viewer = ViewerContext::new("Sam").with_enterprise("  ");
        assert_eq!(viewer.display_label(), "Sam");
    }

    #[test]
    fn deserialize_partial() {
        let viewer: ViewerContext = serde_json::from_str(r#"{"name": "Kim"}"#).expect("deserialize");
        assert_eq!(viewer, ViewerContext::new("Kim"));
    }
}
