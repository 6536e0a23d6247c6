//! Error types for the pipeboard-protocol crate.
//!
//! This module defines the errors raised when a snapshot or request fails
//! validation.

use thiserror::Error;

use crate::card::ItemId;

/// Errors that can occur when validating protocol values.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Two columns of a snapshot share an identifier.
    #[error("duplicate column id in snapshot: {0}")]
    DuplicateColumn(ItemId),

    /// A card identifier appears more than once across the board.
    #[error("duplicate card id in snapshot: {0}")]
    DuplicateCard(ItemId),

    /// A page request had out-of-range parameters.
    #[error("invalid page request: {reason}")]
    InvalidPageRequest {
        /// Why the request was rejected.
        reason: String,
    },
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ProtocolError::DuplicateCard(ItemId::from("p1"));
        assert_eq!(err.to_string(), "duplicate card id in snapshot: p1");

        let err = ProtocolError::InvalidPageRequest {
            reason: "page numbers start at 1".to_string(),
        };
        assert!(err.to_string().contains("invalid page request"));
    }
}
