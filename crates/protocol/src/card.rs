//! Application card types for the pipeline board.
//!
//! This module defines the identifiers shared by cards and columns, the
//! denormalized applicant summary shown on each card, and the [`Card`]
//! struct itself.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identifier for a board item (card or column).
///
/// The listing endpoint hands out identifiers as either strings or numbers.
/// Both are accepted when deserializing and normalized to their string form,
/// so `42` and `"42"` name the same item. Identifiers always serialize as
/// strings.
///
/// # Examples
///
/// ```
/// use pipeboard_protocol::ItemId;
///
/// let id: ItemId = serde_json::from_str("42").unwrap();
/// assert_eq!(id, ItemId::from("42"));
/// assert_eq!(serde_json::to_string(&id).unwrap(), r#""42""#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct ItemId(String);

/// Identifier of an application card.
pub type CardId = ItemId;

/// Identifier of a pipeline column.
pub type ColumnId = ItemId;

/// Wire representation of an identifier.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl From<RawId> for ItemId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        }
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl ItemId {
    /// Creates an identifier from anything string-like.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Applicant summary captured when the board snapshot was fetched.
///
/// This is a display-only copy; it is never re-synced with the backend
/// after the snapshot loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    /// Applicant's full name.
    pub full_name: String,
    /// URL of the applicant's avatar image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    /// Highest education level, as free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    /// Years or description of experience, as free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    /// When the application was submitted.
    pub applied_at: DateTime<Utc>,
    /// Job type applied for (full-time, internship, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    /// Location of the applicant's CV for download.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv_url: Option<String>,
}

impl Applicant {
    /// Creates an applicant summary with only a name and application time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use pipeboard_protocol::Applicant;
    ///
    /// let applicant = Applicant::new("Ada Lovelace", Utc::now());
    /// assert_eq!(applicant.full_name, "Ada Lovelace");
    /// assert!(applicant.cv_url.is_none());
    /// ```
    #[must_use]
    pub fn new(full_name: impl Into<String>, applied_at: DateTime<Utc>) -> Self {
        Self {
            full_name: full_name.into(),
            avatar_url: None,
            gender: None,
            nationality: None,
            education: None,
            experience: None,
            applied_at,
            job_type: None,
            cv_url: None,
        }
    }
}

/// A job application on the pipeline board.
///
/// On the wire the applicant summary fields sit next to the `id`:
///
/// ```json
/// { "id": 17, "fullName": "Ada Lovelace", "appliedAt": "2025-03-01T09:00:00Z" }
/// ```
///
/// # Examples
///
/// ```
/// use pipeboard_protocol::Card;
///
/// let card = Card::new("p1", "Ada Lovelace");
/// assert_eq!(card.id.as_str(), "p1");
/// assert_eq!(card.applicant.full_name, "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this card across the whole board.
    pub id: CardId,
    /// Denormalized applicant snapshot.
    #[serde(flatten)]
    pub applicant: Applicant,
}

impl Card {
    /// Creates a card for an applicant who applied just now.
    #[must_use]
    pub fn new(id: impl Into<CardId>, full_name: impl Into<String>) -> Self {
        Self::with_applicant(id, Applicant::new(full_name, Utc::now()))
    }

    /// Creates a card from a full applicant summary.
    #[must_use]
    pub fn with_applicant(id: impl Into<CardId>, applicant: Applicant) -> Self {
        Self {
            id: id.into(),
            applicant,
        }
    }
}
