//! Snapshot sources feeding [`DragController::initialize`].
//!
//! The board itself never fetches anything. The owning page asks a
//! [`SnapshotSource`] for a page of applications and hands the result to
//! `initialize`. Two sources are provided:
//!
//! - [`StaticSource`]: an in-memory board, paginated on demand
//! - [`FileSource`]: a JSON or JSON5 page file, re-read on every fetch
//!
//! [`DragController::initialize`]: crate::DragController::initialize

use std::path::{Path, PathBuf};

use pipeboard_protocol::{ApplicationPage, Board, Column, PageMeta, PageRequest, SortOrder};
use tracing::{debug, instrument};

use crate::error::{KanbanError, Result};

/// Something that can produce a page of the application listing.
pub trait SnapshotSource {
    /// Fetches one page of the board.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be loaded or is not a
    /// valid board.
    fn fetch(&self, request: &PageRequest) -> Result<ApplicationPage>;

    /// Short human-readable description, shown in the UI.
    fn describe(&self) -> String;
}

impl<S: SnapshotSource + ?Sized> SnapshotSource for Box<S> {
    fn fetch(&self, request: &PageRequest) -> Result<ApplicationPage> {
        (**self).fetch(request)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Cuts one page out of a full board.
///
/// Each column's cards are sorted by application date according to
/// `request.order`, then the `[offset, offset + page_size)` window is kept.
/// Column titles and order are preserved even when a column has no cards on
/// the requested page. `page_count` is driven by the longest column and is
/// never below 1.
///
/// # Examples
///
/// ```
/// use pipeboard_kanban::paginate;
/// use pipeboard_protocol::{Board, Card, Column, PageRequest, SortOrder};
///
/// let board = Board::new(vec![Column::new("all", "All").with_cards(
///     (0..5).map(|i| Card::new(format!("p{i}"), "Applicant")).collect(),
/// )]);
///
/// let page = paginate(&board, &PageRequest::new(2, 2, SortOrder::Oldest).unwrap());
/// assert_eq!(page.data[0].count(), 2);
/// assert_eq!(page.meta.page_count, 3);
/// assert_eq!(page.meta.total, 5);
/// ```
#[must_use]
pub fn paginate(board: &Board, request: &PageRequest) -> ApplicationPage {
    let page_size = request.page_size.max(1) as usize;
    let offset = request.offset();

    let data = board
        .columns
        .iter()
        .map(|column| {
            let mut cards = column.cards.clone();
            // Stable sort keeps snapshot order among equal timestamps.
            match request.order {
                SortOrder::Newest => {
                    cards.sort_by(|a, b| b.applicant.applied_at.cmp(&a.applicant.applied_at));
                }
                SortOrder::Oldest => {
                    cards.sort_by(|a, b| a.applicant.applied_at.cmp(&b.applicant.applied_at));
                }
            }
            let cards = cards.into_iter().skip(offset).take(page_size).collect();
            Column {
                id: column.id.clone(),
                title: column.title.clone(),
                cards,
            }
        })
        .collect();

    let longest = board.columns.iter().map(Column::count).max().unwrap_or(0);
    let page_count = longest.div_ceil(page_size).max(1);

    ApplicationPage {
        data,
        meta: PageMeta {
            page: request.page,
            page_size: request.page_size,
            page_count: u32::try_from(page_count).unwrap_or(u32::MAX),
            total: board.total_cards(),
        },
    }
}

/// In-memory source backed by a full board.
///
/// # Examples
///
/// ```
/// use pipeboard_kanban::{SnapshotSource, StaticSource};
/// use pipeboard_protocol::{PageRequest, dummy::demo_board};
///
/// let source = StaticSource::new(demo_board());
/// let page = source.fetch(&PageRequest::default()).unwrap();
/// assert_eq!(page.data.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    board: Board,
}

impl StaticSource {
    /// Creates a source serving `board`.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self { board }
    }
}

impl SnapshotSource for StaticSource {
    fn fetch(&self, request: &PageRequest) -> Result<ApplicationPage> {
        Ok(paginate(&self.board, request))
    }

    fn describe(&self) -> String {
        "demo pipeline".to_string()
    }
}

/// Source backed by a page file on disk.
///
/// The file holds an [`ApplicationPage`] in JSON or JSON5. It is read again
/// on every fetch, so a refresh picks up edits, and its `data` is validated
/// and paginated like a [`StaticSource`]. The file's own `meta` is ignored.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the page file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and validates the full board from the file.
    fn load(&self) -> Result<Board> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|source| KanbanError::ReadSnapshot {
                path: self.path.clone(),
                source,
            })?;
        let page: ApplicationPage =
            serde_json5::from_str(&content).map_err(|source| KanbanError::ParseSnapshot {
                path: self.path.clone(),
                source,
            })?;
        let board = page.into_board();
        board.validate()?;
        Ok(board)
    }
}

impl SnapshotSource for FileSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn fetch(&self, request: &PageRequest) -> Result<ApplicationPage> {
        let board = self.load()?;
        debug!(cards = board.total_cards(), "loaded snapshot file");
        Ok(paginate(&board, request))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
