//! Drag session controller.
//!
//! Interprets drag-start / drag-over / drag-end events into store mutations
//! and tracks what is currently being dragged.
//!
//! # State machine
//!
//! ```text
//!            drag_start (id resolves)
//!   Idle ───────────────────────────────▶ Dragging ──┐
//!    ▲                                        │      │ drag_over
//!    └────────────── drag_end ────────────────┘ ◀────┘
//! ```
//!
//! - Cross-column moves happen live on `drag_over`, so the card relocates
//!   while the pointer is still down. Hovering inside the card's own column
//!   changes nothing.
//! - `drag_end` reorders within a column when the target is another card of
//!   the same column. Without a target the session just ends; live moves
//!   already applied stay applied.
//! - Every id is re-resolved against the current board on every event, so
//!   a board replaced mid-drag turns the rest of the session into no-ops.

use pipeboard_protocol::{Board, Card, Column, ColumnId, ItemId};
use tracing::{debug, instrument};

use crate::observer::{BoardObserver, CardMoved};
use crate::store::BoardStore;

/// What a drag session is carrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragItem {
    /// A whole column. Column reordering is not supported, so a column
    /// session never mutates the board.
    Column {
        /// The dragged column.
        id: ColumnId,
    },
    /// An application card.
    Card {
        /// Snapshot of the card taken at drag start, for the drag overlay.
        card: Card,
    },
}

impl DragItem {
    /// Returns the identifier of the dragged item.
    #[must_use]
    pub fn id(&self) -> &ItemId {
        match self {
            Self::Column { id } => id,
            Self::Card { card } => &card.id,
        }
    }
}

/// Ephemeral state of an active drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    /// The dragged item.
    pub item: DragItem,
    /// Column the item was in (or was) when the drag started.
    pub origin_column: ColumnId,
    /// Item most recently reported under the pointer, if any.
    pub over: Option<ItemId>,
}

/// The controller's state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No active drag.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging(DragSession),
}

/// Drives the board store from drag events.
///
/// The controller owns the [`BoardStore`] and is the only code path that
/// can mutate it.
///
/// # Examples
///
/// ```
/// use pipeboard_kanban::DragController;
/// use pipeboard_protocol::{Board, Card, ColumnId, Column, ItemId};
///
/// let mut controller = DragController::new(Board::new(vec![
///     Column::new("all", "All").with_cards(vec![Card::new("P1", "Ada"), Card::new("P2", "Grace")]),
///     Column::new("shortlisted", "Shortlisted"),
/// ]));
///
/// assert!(controller.drag_start(&ItemId::from("P2")));
/// controller.drag_over(Some(&ItemId::from("shortlisted")));
/// controller.drag_end(Some(&ItemId::from("shortlisted")));
///
/// let board = controller.board();
/// assert_eq!(board.column(&ColumnId::from("all")).unwrap().count(), 1);
/// assert_eq!(board.column(&ColumnId::from("shortlisted")).unwrap().count(), 1);
/// assert!(!controller.is_dragging());
/// ```
#[derive(Default)]
pub struct DragController {
    store: BoardStore,
    state: DragState,
    observers: Vec<Box<dyn BoardObserver>>,
}

impl std::fmt::Debug for DragController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragController")
            .field("store", &self.store)
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl DragController {
    /// Creates a controller over a seeded board.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            store: BoardStore::with_board(board),
            state: DragState::Idle,
            observers: Vec::new(),
        }
    }

    /// Registers an observer notified after every committed move.
    pub fn subscribe(&mut self, observer: impl BoardObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Returns a read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.store.board()
    }

    /// Returns the underlying store for queries.
    #[must_use]
    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    /// Replaces the board with a freshly fetched snapshot.
    ///
    /// An active session is kept; its ids are re-resolved against the new
    /// board on the next event.
    pub fn initialize(&mut self, columns: Vec<Column>) {
        self.store.initialize(columns);
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Returns the active session, if dragging.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }

    /// Returns `true` if a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Returns the snapshot of the card being dragged, if any.
    #[must_use]
    pub fn active_card(&self) -> Option<&Card> {
        match &self.session()?.item {
            DragItem::Card { card } => Some(card),
            DragItem::Column { .. } => None,
        }
    }

    /// Returns the column currently holding the dragged card.
    ///
    /// This follows live cross-column moves, unlike
    /// [`DragSession::origin_column`].
    #[must_use]
    pub fn active_column(&self) -> Option<&Column> {
        let card = self.active_card()?;
        self.store.find_column_containing(&card.id)
    }

    /// Starts a drag session for `id`.
    ///
    /// Column ids are checked first, then cards. If `id` names neither, the
    /// controller stays idle and `false` is returned. Starting while already
    /// dragging replaces the previous session.
    #[instrument(skip_all, fields(id = %id))]
    pub fn drag_start(&mut self, id: &ItemId) -> bool {
        let session = if self.board().has_column(id) {
            DragSession {
                item: DragItem::Column { id: id.clone() },
                origin_column: id.clone(),
                over: None,
            }
        } else if let Some(column) = self.store.find_column_containing(id) {
            let Some(card) = column.card(id) else {
                return false;
            };
            DragSession {
                item: DragItem::Card { card: card.clone() },
                origin_column: column.id.clone(),
                over: None,
            }
        } else {
            debug!("drag start ignored: unknown id");
            return false;
        };

        debug!(origin = %session.origin_column, "drag started");
        self.state = DragState::Dragging(session);
        true
    }

    /// Handles the pointer moving over `over` during a drag.
    ///
    /// When the hovered column (the column itself, or the column of the
    /// hovered card) differs from the dragged card's current column, the
    /// card is moved there immediately. Hovering its own column is ignored.
    pub fn drag_over(&mut self, over: Option<&ItemId>) {
        let DragState::Dragging(session) = &mut self.state else {
            return;
        };
        session.over = over.cloned();

        let DragItem::Card { card } = &session.item else {
            return;
        };
        let Some(over) = over else {
            return;
        };
        let card_id = card.id.clone();

        let Some(active_column) = self.store.find_column_containing(&card_id) else {
            return;
        };
        let Some(over_column) = self.resolve_column(over) else {
            return;
        };
        if active_column.id == over_column {
            return;
        }

        let from = active_column.id.clone();
        if let Some(event) = self.store.move_card_across_columns(&card_id, &from, &over_column) {
            self.notify(&event);
        }
    }

    /// Ends the drag session, dropping on `over` if given.
    ///
    /// If `over` is a different card in the same column as the dragged card,
    /// the dragged card takes its slot. Ephemeral state is always cleared.
    pub fn drag_end(&mut self, over: Option<&ItemId>) {
        let state = std::mem::take(&mut self.state);
        let DragState::Dragging(session) = state else {
            return;
        };

        let DragItem::Card { card } = session.item else {
            debug!("column drag ended");
            return;
        };
        let Some(over) = over else {
            debug!(card = %card.id, "drag ended without a target");
            return;
        };
        if *over == card.id {
            return;
        }

        let Some(active_column) = self.store.find_column_containing(&card.id) else {
            return;
        };
        let Some(over_column) = self.store.find_column_containing(over) else {
            return;
        };
        if active_column.id != over_column.id {
            return;
        }

        let column_id = active_column.id.clone();
        if let Some(event) = self.store.reorder_within_column(&column_id, &card.id, over) {
            self.notify(&event);
        }
    }

    /// Ends the drag session without a drop target.
    pub fn drag_cancel(&mut self) {
        self.drag_end(None);
    }

    /// Resolves an item under the pointer to the column it belongs to.
    fn resolve_column(&self, id: &ItemId) -> Option<ColumnId> {
        if self.board().has_column(id) {
            return Some(id.clone());
        }
        self.store
            .find_column_containing(id)
            .map(|column| column.id.clone())
    }

    fn notify(&mut self, event: &CardMoved) {
        for observer in &mut self.observers {
            observer.card_moved(event);
        }
    }
}
