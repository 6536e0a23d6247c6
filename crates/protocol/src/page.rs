//! Paginated snapshot request and response types.
//!
//! The owning page fetches the board from a paginated application listing.
//! A request carries `page`, `pageSize` and `order`; the response is
//! `{ data: Column[], meta: { page, pageSize, pageCount, total } }`.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Column};
use crate::error::{ProtocolError, Result};

/// Largest page size a request may ask for.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Order in which applications are listed within each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Most recent applications first.
    #[default]
    Newest,
    /// Oldest applications first.
    Oldest,
}

impl SortOrder {
    /// Returns the other order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipeboard_protocol::SortOrder;
    ///
    /// assert_eq!(SortOrder::Newest.toggled(), SortOrder::Oldest);
    /// ```
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Newest => Self::Oldest,
            Self::Oldest => Self::Newest,
        }
    }

    /// Returns a human-readable label for the order.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Newest => "newest first",
            Self::Oldest => "oldest first",
        }
    }
}

/// Query parameters for one page of the application listing.
///
/// # Examples
///
/// ```
/// use pipeboard_protocol::{PageRequest, SortOrder};
///
/// let request = PageRequest::new(2, 10, SortOrder::Oldest).unwrap();
/// assert_eq!(request.offset(), 10);
///
/// assert!(PageRequest::new(0, 10, SortOrder::Newest).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,
    /// Maximum number of cards per column on a page.
    pub page_size: u32,
    /// Listing order.
    pub order: SortOrder,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            order: SortOrder::default(),
        }
    }
}

impl PageRequest {
    /// Creates a validated page request.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidPageRequest`] if `page` is zero or
    /// `page_size` is outside `1..=MAX_PAGE_SIZE`.
    pub fn new(page: u32, page_size: u32, order: SortOrder) -> Result<Self> {
        if page == 0 {
            return Err(ProtocolError::InvalidPageRequest {
                reason: "page numbers start at 1".to_string(),
            });
        }
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(ProtocolError::InvalidPageRequest {
                reason: format!("page size must be between 1 and {MAX_PAGE_SIZE}, got {page_size}"),
            });
        }
        Ok(Self {
            page,
            page_size,
            order,
        })
    }

    /// Returns the number of cards skipped in each column before this page.
    #[must_use]
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.page_size as usize)
    }

    /// Returns the same request pointed at another page.
    #[must_use]
    pub fn with_page(self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }
}

/// Pagination metadata returned alongside a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// The page this response holds (1-based).
    #[serde(default = "first_page")]
    pub page: u32,
    /// Page size used to produce this response.
    #[serde(default)]
    pub page_size: u32,
    /// Number of pages available; at least 1.
    #[serde(default = "first_page")]
    pub page_count: u32,
    /// Total number of cards across every page and column.
    #[serde(default)]
    pub total: usize,
}

fn first_page() -> u32 {
    1
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 0,
            page_count: 1,
            total: 0,
        }
    }
}

impl PageMeta {
    /// Returns `true` if a later page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    /// Returns `true` if an earlier page exists.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// One page of the application listing.
///
/// # Examples
///
/// ```
/// use pipeboard_protocol::ApplicationPage;
///
/// let json = r#"{
///     "data": [{ "id": 1, "title": "All", "cards": [] }],
///     "meta": { "page": 1, "pageSize": 20, "pageCount": 1, "total": 0 }
/// }"#;
/// let page: ApplicationPage = serde_json::from_str(json).unwrap();
/// assert_eq!(page.data.len(), 1);
/// assert!(!page.meta.has_next());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationPage {
    /// Columns with the cards belonging to this page.
    pub data: Vec<Column>,
    /// Pagination metadata.
    #[serde(default)]
    pub meta: PageMeta,
}

impl ApplicationPage {
    /// Converts the page data into a board, discarding the metadata.
    #[must_use]
    pub fn into_board(self) -> Board {
        Board::new(self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_validation() {
        assert!(PageRequest::new(1, 1, SortOrder::Newest).is_ok());
        assert!(PageRequest::new(1, MAX_PAGE_SIZE, SortOrder::Newest).is_ok());
        assert!(PageRequest::new(0, 10, SortOrder::Newest).is_err());
        assert!(PageRequest::new(1, 0, SortOrder::Newest).is_err());
        assert!(PageRequest::new(1, MAX_PAGE_SIZE + 1, SortOrder::Newest).is_err());
    }

    #[test]
    fn page_request_offset() {
        let request = PageRequest::new(3, 5, SortOrder::Newest).expect("valid");
        assert_eq!(request.offset(), 10);
        assert_eq!(PageRequest::default().offset(), 0);
    }

    #[test]
    fn with_page_never_goes_below_one() {
        let request = PageRequest::default().with_page(0);
        assert_eq!(request.page, 1);
    }

    #[test]
    fn page_request_json_format() {
        let request = PageRequest::new(2, 10, SortOrder::Oldest).expect("valid");
        let json = serde_json::to_string(&request).expect("serialize");
        assert_eq!(json, r#"{"page":2,"pageSize":10,"order":"oldest"}"#);
    }

    #[test]
    fn meta_navigation() {
        let meta = PageMeta {
            page: 2,
            page_size: 10,
            page_count: 3,
            total: 25,
        };
        assert!(meta.has_next());
        assert!(meta.has_previous());

        let last = PageMeta { page: 3, ..meta };
        assert!(!last.has_next());
        assert!(!PageMeta::default().has_previous());
    }

    #[test]
    fn page_without_meta_uses_defaults() {
        let page: ApplicationPage = serde_json::from_str(r#"{"data": []}"#).expect("deserialize");
        assert_eq!(page.meta, PageMeta::default());
        assert!(page.into_board().is_empty());
    }

    #[test]
    fn sort_order_toggles() {
        assert_eq!(SortOrder::Oldest.toggled(), SortOrder::Newest);
        assert_eq!(SortOrder::Newest.toggled().toggled(), SortOrder::Newest);
    }
}
