//! Centralized layout measurements and geometry for the TUI.
//!
//! Rendering and pointer hit-testing both go through the functions in this
//! module, so a cell under the mouse always resolves to the column or card
//! that was drawn there.

use pipeboard_protocol::{Board, ItemId};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Borders},
};

/// Height of the header bar in rows.
///
/// The header displays the application title, viewer and page indicator.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Height of each application card in rows.
///
/// This includes the border (2 rows) and content (name, then job and date).
pub const CARD_HEIGHT: u16 = 4;

/// Minimum terminal height for useful rendering without the header.
///
/// Status bar plus a column showing at least one card.
pub const MIN_HEIGHT: u16 = 10;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim 3 rows of content space.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
pub const MIN_WIDTH: u16 = 40;

/// Areas of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Header bar, if shown.
    pub header: Option<Rect>,
    /// Board or detail view.
    pub content: Rect,
    /// Status bar at the bottom.
    pub status: Rect,
}

/// Splits the terminal area into header, content and status bar.
///
/// # Examples
///
/// ```
/// use ratatui::layout::Rect;
/// use pipeboard_tui::layout::screen_layout;
///
/// let layout = screen_layout(Rect::new(0, 0, 80, 24), true);
/// assert_eq!(layout.header, Some(Rect::new(0, 0, 80, 3)));
/// assert_eq!(layout.content, Rect::new(0, 3, 80, 18));
/// assert_eq!(layout.status, Rect::new(0, 21, 80, 3));
/// ```
#[must_use]
pub fn screen_layout(area: Rect, show_header: bool) -> ScreenLayout {
    let header_height = if show_header {
        HEADER_HEIGHT.min(area.height)
    } else {
        0
    };
    let status_height = STATUS_BAR_HEIGHT.min(area.height.saturating_sub(header_height));
    let content_height = area.height - header_height - status_height;

    ScreenLayout {
        header: show_header.then(|| Rect::new(area.x, area.y, area.width, header_height)),
        content: Rect::new(area.x, area.y + header_height, area.width, content_height),
        status: Rect::new(
            area.x,
            area.y + header_height + content_height,
            area.width,
            status_height,
        ),
    }
}

/// Position of a column in the horizontal layout.
///
/// Used to determine which borders to render for each column, enabling
/// collapsed borders between adjacent columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPosition {
    /// The board's only column: all borders, rounded corners.
    Only,
    /// Leftmost column: no right border.
    First,
    /// Middle columns: no right border, T-connectors on the left.
    Middle,
    /// Rightmost column: both borders, T-connectors on the left.
    Last,
}

impl ColumnPosition {
    /// Returns the position of column `index` among `count` columns.
    #[must_use]
    pub fn of(index: usize, count: usize) -> Self {
        match (index, count) {
            (_, 0 | 1) => Self::Only,
            (0, _) => Self::First,
            (i, n) if i + 1 == n => Self::Last,
            _ => Self::Middle,
        }
    }

    /// Borders drawn by a column in this position.
    #[must_use]
    pub fn borders(self) -> Borders {
        match self {
            Self::Only | Self::Last => Borders::ALL,
            Self::First | Self::Middle => Borders::TOP | Borders::BOTTOM | Borders::LEFT,
        }
    }
}

/// Splits the board area into equal-width column areas.
#[must_use]
pub fn column_areas(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let count = u32::try_from(count).unwrap_or(u32::MAX);
    let constraints = (0..count).map(|_| Constraint::Ratio(1, count));
    Layout::horizontal(constraints).split(area).to_vec()
}

/// Returns the card area inside a column's borders.
#[must_use]
pub fn column_inner(area: Rect, position: ColumnPosition) -> Rect {
    Block::default().borders(position.borders()).inner(area)
}

/// Number of cards that fit in a column's inner area. Always at least 1.
#[must_use]
pub fn visible_cards(inner: Rect) -> usize {
    (inner.height / CARD_HEIGHT).max(1) as usize
}

/// Calculates the scroll offset that keeps `anchor` visible.
///
/// The anchor is kept near the middle of the column once the list is longer
/// than what fits.
#[must_use]
pub fn calculate_scroll_offset(anchor: Option<usize>, total: usize, visible: usize) -> usize {
    let Some(selected) = anchor else {
        return 0;
    };

    if total <= visible {
        return 0;
    }

    let max_offset = total.saturating_sub(visible);

    if selected < visible / 2 {
        0
    } else {
        (selected.saturating_sub(visible / 2)).min(max_offset)
    }
}

/// A card slot: which card goes where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    /// Index of the card within its column.
    pub index: usize,
    /// Where the card is drawn.
    pub area: Rect,
}

/// Lays out the visible cards of a column.
#[must_use]
pub fn card_slots(inner: Rect, total: usize, anchor: Option<usize>) -> Vec<CardSlot> {
    let visible = visible_cards(inner);
    let offset = calculate_scroll_offset(anchor, total, visible);
    let bottom = inner.y.saturating_add(inner.height);

    (offset..total)
        .take(visible)
        .enumerate()
        .map_while(|(row, index)| {
            let y = inner
                .y
                .saturating_add(u16::try_from(row).ok()?.saturating_mul(CARD_HEIGHT));
            (y < bottom).then(|| CardSlot {
                index,
                area: Rect::new(inner.x, y, inner.width, CARD_HEIGHT.min(bottom - y)),
            })
        })
        .collect()
}

/// What the board is showing besides the cards themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardView<'a> {
    /// Index of the focused column.
    pub selected_column: usize,
    /// Index of the selected card in the focused column.
    pub selected_card: Option<usize>,
    /// Card in the focused column targeted by a keyboard drag.
    pub hover_card: Option<usize>,
    /// Card currently being dragged.
    pub dragging: Option<&'a ItemId>,
}

impl BoardView<'_> {
    /// Card the focused column scrolls to keep visible.
    #[must_use]
    pub fn scroll_anchor(&self, column: usize) -> Option<usize> {
        if column == self.selected_column {
            self.hover_card.or(self.selected_card)
        } else {
            None
        }
    }
}

/// Result of hit-testing a terminal cell against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardHit {
    /// A column, outside any card (header, border or empty space).
    Column(usize),
    /// A card.
    Card {
        /// Index of the column.
        column: usize,
        /// Index of the card within the column.
        index: usize,
    },
}

impl BoardHit {
    /// Resolves the hit to the identifier of the item under the pointer.
    #[must_use]
    pub fn item_id<'b>(&self, board: &'b Board) -> Option<&'b ItemId> {
        match *self {
            Self::Column(column) => board.columns.get(column).map(|c| &c.id),
            Self::Card { column, index } => board
                .columns
                .get(column)
                .and_then(|c| c.cards.get(index))
                .map(|card| &card.id),
        }
    }
}

/// Finds the column or card drawn at `(x, y)` in a board rendered into `area`.
///
/// # Examples
///
/// ```
/// use pipeboard_protocol::{Board, Card, Column};
/// use pipeboard_tui::layout::{BoardHit, BoardView, hit_test};
/// use ratatui::layout::Rect;
///
/// let board = Board::new(vec![
///     Column::new("all", "All").with_cards(vec![Card::new("p1", "Ada")]),
///     Column::new("hired", "Hired"),
/// ]);
/// let area = Rect::new(0, 0, 40, 20);
/// let view = BoardView::default();
///
/// assert_eq!(hit_test(&board, &view, area, 5, 2), Some(BoardHit::Card { column: 0, index: 0 }));
/// assert_eq!(hit_test(&board, &view, area, 25, 2), Some(BoardHit::Column(1)));
/// assert_eq!(hit_test(&board, &view, area, 5, 30), None);
/// ```
#[must_use]
pub fn hit_test(
    board: &Board,
    view: &BoardView<'_>,
    area: Rect,
    x: u16,
    y: u16,
) -> Option<BoardHit> {
    let count = board.columns.len();
    let (column, column_area) = column_areas(area, count)
        .into_iter()
        .enumerate()
        .find(|(_, rect)| rect.contains((x, y).into()))?;

    let inner = column_inner(column_area, ColumnPosition::of(column, count));
    let total = board.columns[column].cards.len();
    let card = card_slots(inner, total, view.scroll_anchor(column))
        .into_iter()
        .find(|slot| slot.area.contains((x, y).into()));

    Some(match card {
        Some(slot) => BoardHit::Card {
            column,
            index: slot.index,
        },
        None => BoardHit::Column(column),
    })
}
