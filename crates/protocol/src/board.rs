//! Pipeline board types and read-only queries.
//!
//! This module defines the [`Column`] and [`Board`] structures that hold the
//! ordered application cards. Only queries live here; mutation of a live
//! board is owned by the store in `pipeboard-kanban`.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId, ColumnId, ItemId};
use crate::error::{ProtocolError, Result};

/// A single column (hiring stage) on the pipeline board.
///
/// Cards are ordered by position; the order is both display order and
/// pipeline priority.
///
/// # Examples
///
/// ```
/// use pipeboard_protocol::{Card, Column};
///
/// let column = Column::new("shortlisted", "Shortlisted")
///     .with_cards(vec![Card::new("p1", "Ada Lovelace")]);
/// assert_eq!(column.count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Identifier, unique among columns.
    pub id: ColumnId,
    /// Display label.
    pub title: String,
    /// Cards in this column, ordered by position.
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Column {
    /// Creates an empty column.
    #[must_use]
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cards: Vec::new(),
        }
    }

    /// Replaces the cards of this column.
    #[must_use]
    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    /// Returns the number of cards in this column.
    ///
    /// This is the only count the board exposes; it is always derived from
    /// the card list.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the column has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the index of a card within this column, if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipeboard_protocol::{Card, CardId, Column};
    ///
    /// let column = Column::new("all", "All").with_cards(vec![
    ///     Card::new("p1", "Ada"),
    ///     Card::new("p2", "Grace"),
    /// ]);
    /// assert_eq!(column.position(&CardId::from("p2")), Some(1));
    /// assert_eq!(column.position(&CardId::from("p9")), None);
    /// ```
    #[must_use]
    pub fn position(&self, card_id: &CardId) -> Option<usize> {
        self.cards.iter().position(|c| &c.id == card_id)
    }

    /// Returns a reference to a card by ID, if found.
    #[must_use]
    pub fn card(&self, card_id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == card_id)
    }
}

/// An application pipeline board: an ordered sequence of columns.
///
/// An empty board (no columns) is a valid state; it is what renders before
/// any snapshot has been loaded.
///
/// # Examples
///
/// ```
/// use pipeboard_protocol::{Board, Card, CardId, Column};
///
/// let board = Board::new(vec![
///     Column::new("all", "All").with_cards(vec![Card::new("p1", "Ada")]),
///     Column::new("hired", "Hired"),
/// ]);
///
/// let column = board.find_column_containing(&CardId::from("p1")).unwrap();
/// assert_eq!(column.title, "All");
/// assert_eq!(board.total_cards(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Columns in display order.
    pub columns: Vec<Column>,
}

impl Board {
    /// Creates a board from its columns.
    #[must_use]
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Returns `true` if the board has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns a column by ID, if found.
    #[must_use]
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Returns the index of a column by ID, if found.
    #[must_use]
    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }

    /// Returns `true` if `id` names a column of this board.
    #[must_use]
    pub fn has_column(&self, id: &ItemId) -> bool {
        self.column(id).is_some()
    }

    /// Finds the column whose card list contains `card_id`.
    ///
    /// Linear scan over every column; fine at the scale of a review board.
    #[must_use]
    pub fn find_column_containing(&self, card_id: &CardId) -> Option<&Column> {
        self.columns.iter().find(|c| c.position(card_id).is_some())
    }

    /// Finds a card by ID across all columns.
    #[must_use]
    pub fn card(&self, card_id: &CardId) -> Option<&Card> {
        self.columns.iter().find_map(|c| c.card(card_id))
    }

    /// Returns the total number of cards across all columns.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.columns.iter().map(Column::count).sum()
    }

    /// Checks the identity invariants of a snapshot.
    ///
    /// Column ids must be unique among columns and every card id must appear
    /// exactly once across the whole board.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::DuplicateColumn`] or
    /// [`ProtocolError::DuplicateCard`] naming the first repeated id.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipeboard_protocol::{Board, Card, Column};
    ///
    /// let board = Board::new(vec![
    ///     Column::new("a", "A").with_cards(vec![Card::new("p1", "Ada")]),
    ///     Column::new("b", "B").with_cards(vec![Card::new("p1", "Ada")]),
    /// ]);
    /// assert!(board.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let mut columns = HashSet::new();
        let mut cards = HashSet::new();
        for column in &self.columns {
            if !columns.insert(&column.id) {
                return Err(ProtocolError::DuplicateColumn(column.id.clone()));
            }
            for card in &column.cards {
                if !cards.insert(&card.id) {
                    return Err(ProtocolError::DuplicateCard(card.id.clone()));
                }
            }
        }
        Ok(())
    }
}

/// Compact one-line-per-column dump, used in logs and tests.
///
/// ```text
/// all (2): P1, P3
/// shortlisted (1): P2
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} ({}):", column.id, column.count())?;
            for (j, card) in column.cards.iter().enumerate() {
                let sep = if j == 0 { " " } else { ", " };
                write!(f, "{sep}{}", card.id)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Board {
        Board::new(vec![
            Column::new("all", "All applicants").with_cards(vec![
                Card::new("P1", "Ada"),
                Card::new("P2", "Grace"),
                Card::new("P3", "Alan"),
            ]),
            Column::new("shortlisted", "Shortlisted"),
        ])
    }

    #[test]
    fn column_count_tracks_cards() {
        let mut column = Column::new("c", "C");
        assert_eq!(column.count(), 0);
        assert!(column.is_empty());

        column.cards.push(Card::new("x", "X"));
        assert_eq!(column.count(), 1);
    }

    #[test]
    fn find_column_containing_scans_all_columns() {
        let board = sample_board();
        let column = board
            .find_column_containing(&CardId::from("P3"))
            .expect("P3 should be on the board");
        assert_eq!(column.id.as_str(), "all");
        assert!(board.find_column_containing(&CardId::from("P9")).is_none());
    }

    #[test]
    fn column_ids_are_not_cards() {
        let board = sample_board();
        assert!(board.has_column(&ItemId::from("shortlisted")));
        assert!(board.find_column_containing(&ItemId::from("shortlisted")).is_none());
        assert!(board.card(&ItemId::from("shortlisted")).is_none());
    }

    #[test]
    fn empty_board_is_valid() {
        let board = Board::default();
        assert!(board.is_empty());
        assert_eq!(board.total_cards(), 0);
        assert!(board.validate().is_ok());
        assert_eq!(board.to_string(), "");
    }

    #[test]
    fn validate_rejects_duplicate_columns() {
        let board = Board::new(vec![Column::new("a", "A"), Column::new("a", "Again")]);
        assert!(matches!(
            board.validate(),
            Err(ProtocolError::DuplicateColumn(id)) if id.as_str() == "a"
        ));
    }

    #[test]
    fn validate_rejects_duplicate_cards_within_column() {
        let board = Board::new(vec![Column::new("a", "A").with_cards(vec![
            Card::new("p", "One"),
            Card::new("p", "Two"),
        ])]);
        assert!(matches!(
            board.validate(),
            Err(ProtocolError::DuplicateCard(id)) if id.as_str() == "p"
        ));
    }

    #[test]
    fn display_lists_columns_and_cards() {
        assert_eq!(
            sample_board().to_string(),
            "all (3): P1, P2, P3\nshortlisted (0):"
        );
    }

    #[test]
    fn board_deserializes_column_without_cards() {
        let json = r#"{"columns": [{"id": 1, "title": "Hired"}]}"#;
        let board: Board = serde_json::from_str(json).expect("deserialize");
        assert_eq!(board.columns.len(), 1);
        assert_eq!(board.columns[0].id.as_str(), "1");
        assert!(board.columns[0].is_empty());
    }
}
