//! Shared protocol types for the pipeboard application.
//!
//! This crate defines the types used across all pipeboard components:
//! application cards, pipeline columns and boards, paginated snapshot
//! pages, the viewer context, TUI messages, and error types.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`card`]: Item identifiers, applicant summaries, and the `Card` struct
//! - [`board`]: Pipeline columns and the `Board` struct (read-only queries)
//! - [`page`]: Page requests and paginated responses
//! - [`viewer`]: The current user's identity
//! - [`message`]: TUI event messages
//! - [`dummy`]: Demo pipeline data
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! Reading a snapshot page:
//!
//! ```
//! use pipeboard_protocol::{ApplicationPage, CardId};
//!
//! let json = r#"{
//!     "data": [
//!         { "id": "all", "title": "All applicants", "cards": [
//!             { "id": 1, "fullName": "Ada Lovelace", "appliedAt": "2025-03-01T09:00:00Z" }
//!         ] },
//!         { "id": "shortlisted", "title": "Shortlisted", "cards": [] }
//!     ],
//!     "meta": { "page": 1, "pageSize": 20, "pageCount": 1, "total": 1 }
//! }"#;
//!
//! let board = serde_json::from_str::<ApplicationPage>(json).unwrap().into_board();
//! assert!(board.validate().is_ok());
//! assert_eq!(board.find_column_containing(&CardId::from("1")).unwrap().title, "All applicants");
//! ```

pub mod board;
pub mod card;
pub mod dummy;
pub mod error;
pub mod message;
pub mod page;
pub mod viewer;

// Re-export primary types at crate root for convenience
pub use board::{Board, Column};
pub use card::{Applicant, Card, CardId, ColumnId, ItemId};
pub use error::{ProtocolError, Result};
pub use message::Message;
pub use page::{
    ApplicationPage, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageMeta, PageRequest, SortOrder,
};
pub use viewer::ViewerContext;
