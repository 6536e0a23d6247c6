//! Error types for snapshot loading.

use std::path::PathBuf;

use pipeboard_protocol::ProtocolError;

/// Errors that can occur while fetching a board snapshot.
#[derive(Debug, thiserror::Error)]
pub enum KanbanError {
    /// Failed to read a snapshot file.
    #[error("failed to read snapshot at {path}: {source}")]
    ReadSnapshot {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A snapshot file did not contain a valid page.
    #[error("failed to parse snapshot at {path}: {source}")]
    ParseSnapshot {
        /// The offending file.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json5::Error,
    },

    /// The snapshot parsed but broke a board invariant.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(#[from] ProtocolError),
}

/// A specialized Result type for board operations.
pub type Result<T> = std::result::Result<T, KanbanError>;
