//! Board state store.
//!
//! The store holds the canonical column/card arrangement. Queries are public;
//! the two mutation operations are crate-private so that only the
//! [`DragController`](crate::DragController) can relocate cards.
//!
//! Every mutation is defensive: an unknown or stale identifier leaves the
//! board untouched and returns `None`, never an error or a panic.

use pipeboard_protocol::{Board, CardId, Column, ColumnId};
use tracing::debug;

use crate::observer::CardMoved;

/// Owner of the board's columns and cards.
///
/// # Examples
///
/// ```
/// use pipeboard_kanban::BoardStore;
/// use pipeboard_protocol::{Card, CardId, Column};
///
/// let mut store = BoardStore::new();
/// assert!(store.board().is_empty());
///
/// store.initialize(vec![
///     Column::new("all", "All").with_cards(vec![Card::new("p1", "Ada")]),
/// ]);
/// assert_eq!(store.total_cards(), 1);
/// assert!(store.find_column_containing(&CardId::from("p1")).is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardStore {
    board: Board,
}

impl BoardStore {
    /// Creates a store with an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with a board.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        Self { board }
    }

    /// Returns a read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the entire board state.
    ///
    /// There is no merge with the previous state. A drag session that still
    /// references ids from the old board resolves against the new one, and
    /// ids that no longer exist simply turn its operations into no-ops.
    pub fn initialize(&mut self, columns: Vec<Column>) {
        debug!(columns = columns.len(), "initializing board");
        self.board = Board::new(columns);
    }

    /// Finds the column whose card list contains `card_id`.
    #[must_use]
    pub fn find_column_containing(&self, card_id: &CardId) -> Option<&Column> {
        self.board.find_column_containing(card_id)
    }

    /// Returns the total number of cards on the board.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.board.total_cards()
    }

    /// Moves a card from the end of one column's list to the end of another.
    ///
    /// No-op (returns `None`) when `from == to`, when either column is
    /// unknown, or when the card is not in `from`.
    pub(crate) fn move_card_across_columns(
        &mut self,
        card_id: &CardId,
        from: &ColumnId,
        to: &ColumnId,
    ) -> Option<CardMoved> {
        if from == to {
            return None;
        }
        let from_idx = self.board.column_index(from)?;
        let to_idx = self.board.column_index(to)?;
        let pos = self.board.columns[from_idx].position(card_id)?;

        let card = self.board.columns[from_idx].cards.remove(pos);
        let destination = &mut self.board.columns[to_idx].cards;
        destination.push(card);
        let new_index = destination.len() - 1;

        debug!(card = %card_id, %from, %to, "moved card across columns");
        Some(CardMoved {
            card_id: card_id.clone(),
            from_column: from.clone(),
            to_column: to.clone(),
            new_index,
        })
    }

    /// Moves `card_id` into the slot currently held by `target_card_id`.
    ///
    /// This is a stable array move: the card is removed, then inserted at
    /// the target's former index, so the cards in between shift by one.
    /// For `[A, B, C, D]`, moving `A` onto `C` yields `[B, C, A, D]`.
    ///
    /// No-op (returns `None`) if the column or either card is absent, or if
    /// both ids resolve to the same index.
    pub(crate) fn reorder_within_column(
        &mut self,
        column_id: &ColumnId,
        card_id: &CardId,
        target_card_id: &CardId,
    ) -> Option<CardMoved> {
        let col_idx = self.board.column_index(column_id)?;
        let column = &mut self.board.columns[col_idx];
        let from = column.position(card_id)?;
        let to = column.position(target_card_id)?;
        if from == to {
            return None;
        }

        let card = column.cards.remove(from);
        column.cards.insert(to, card);

        debug!(card = %card_id, column = %column_id, from, to, "reordered card");
        Some(CardMoved {
            card_id: card_id.clone(),
            from_column: column_id.clone(),
            to_column: column_id.clone(),
            new_index: to,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipeboard_protocol::Card;

    fn ids(store: &BoardStore, column: &str) -> Vec<String> {
        store
            .board()
            .column(&ColumnId::from(column))
            .expect("column exists")
            .cards
            .iter()
            .map(|c| c.id.to_string())
            .collect()
    }

    fn store_with(columns: &[(&str, &[&str])]) -> BoardStore {
        let mut store = BoardStore::new();
        store.initialize(
            columns
                .iter()
                .map(|(id, cards)| {
                    Column::new(*id, id.to_uppercase())
                        .with_cards(cards.iter().map(|c| Card::new(*c, *c)).collect())
                })
                .collect(),
        );
        store
    }

    #[test]
    fn initialize_replaces_everything() {
        let mut store = store_with(&[("all", &["P1", "P2"])]);
        store.initialize(vec![Column::new("fresh", "Fresh")]);

        assert_eq!(store.board().columns.len(), 1);
        assert_eq!(store.total_cards(), 0);
        assert!(store.find_column_containing(&CardId::from("P1")).is_none());
    }

    #[test]
    fn move_across_appends_to_destination() {
        let mut store = store_with(&[("all", &["P1", "P2", "P3"]), ("short", &["S1"])]);

        let moved = store
            .move_card_across_columns(
                &CardId::from("P2"),
                &ColumnId::from("all"),
                &ColumnId::from("short"),
            )
            .expect("move should apply");

        assert_eq!(ids(&store, "all"), ["P1", "P3"]);
        assert_eq!(ids(&store, "short"), ["S1", "P2"]);
        assert_eq!(moved.new_index, 1);
        assert!(moved.is_cross_column());
    }

    #[test]
    fn move_across_same_column_is_noop() {
        let mut store = store_with(&[("all", &["P1", "P2"])]);
        let before = store.clone();

        let moved = store.move_card_across_columns(
            &CardId::from("P1"),
            &ColumnId::from("all"),
            &ColumnId::from("all"),
        );

        assert!(moved.is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn move_across_missing_ids_is_noop() {
        let mut store = store_with(&[("all", &["P1"]), ("short", &[])]);
        let before = store.clone();

        let all = ColumnId::from("all");
        let short = ColumnId::from("short");
        assert!(store.move_card_across_columns(&CardId::from("nope"), &all, &short).is_none());
        // Card exists but not in the claimed source column.
        assert!(store.move_card_across_columns(&CardId::from("P1"), &short, &all).is_none());
        assert!(
            store
                .move_card_across_columns(&CardId::from("P1"), &all, &ColumnId::from("gone"))
                .is_none()
        );
        assert!(
            store
                .move_card_across_columns(&CardId::from("P1"), &ColumnId::from("gone"), &short)
                .is_none()
        );

        assert_eq!(store, before);
    }

    #[test]
    fn reorder_forward_lands_in_target_slot() {
        let mut store = store_with(&[("col", &["A", "B", "C", "D"])]);

        let moved = store
            .reorder_within_column(&ColumnId::from("col"), &CardId::from("A"), &CardId::from("C"))
            .expect("reorder should apply");

        assert_eq!(ids(&store, "col"), ["B", "C", "A", "D"]);
        assert_eq!(moved.new_index, 2);
        assert!(!moved.is_cross_column());
    }

    #[test]
    fn reorder_backward_lands_in_target_slot() {
        let mut store = store_with(&[("col", &["A", "B", "C", "D"])]);

        store
            .reorder_within_column(&ColumnId::from("col"), &CardId::from("D"), &CardId::from("B"))
            .expect("reorder should apply");

        assert_eq!(ids(&store, "col"), ["A", "D", "B", "C"]);
    }

    #[test]
    fn reorder_adjacent_cards() {
        let mut store = store_with(&[("col", &["A", "B", "C"])]);

        store
            .reorder_within_column(&ColumnId::from("col"), &CardId::from("A"), &CardId::from("B"))
            .expect("reorder should apply");

        assert_eq!(ids(&store, "col"), ["B", "A", "C"]);
    }

    #[test]
    fn reorder_onto_itself_is_noop() {
        let mut store = store_with(&[("col", &["A", "B"])]);
        let before = store.clone();

        let col = ColumnId::from("col");
        assert!(store.reorder_within_column(&col, &CardId::from("A"), &CardId::from("A")).is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn reorder_missing_ids_is_noop() {
        let mut store = store_with(&[("col", &["A", "B"]), ("other", &["X"])]);
        let before = store.clone();

        let col = ColumnId::from("col");
        assert!(store.reorder_within_column(&col, &CardId::from("?"), &CardId::from("A")).is_none());
        assert!(store.reorder_within_column(&col, &CardId::from("A"), &CardId::from("?")).is_none());
        // Target lives in another column.
        assert!(store.reorder_within_column(&col, &CardId::from("A"), &CardId::from("X")).is_none());
        assert!(
            store
                .reorder_within_column(&ColumnId::from("?"), &CardId::from("A"), &CardId::from("B"))
                .is_none()
        );

        assert_eq!(store, before);
    }

    #[test]
    fn operations_on_empty_board_do_not_panic() {
        let mut store = BoardStore::new();
        let a = ColumnId::from("a");
        let b = ColumnId::from("b");
        assert!(store.move_card_across_columns(&CardId::from("x"), &a, &b).is_none());
        assert!(store.reorder_within_column(&a, &CardId::from("x"), &CardId::from("y")).is_none());
        assert!(store.find_column_containing(&CardId::from("x")).is_none());
        assert!(store.board().is_empty());
    }
}
