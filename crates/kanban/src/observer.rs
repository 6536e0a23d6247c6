//! Notification seam for committed card moves.
//!
//! The board never writes moves back to a server itself. Instead, every
//! committed mutation is reported to the registered [`BoardObserver`]s, so a
//! persistence layer can be attached without touching the state machine.

use pipeboard_protocol::{CardId, ColumnId};
use tracing::info;

/// A card relocation that has been applied to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardMoved {
    /// The card that moved.
    pub card_id: CardId,
    /// Column the card was in before the move.
    pub from_column: ColumnId,
    /// Column the card is in after the move. Equal to `from_column` for a
    /// reorder within one column.
    pub to_column: ColumnId,
    /// Index of the card in `to_column` after the move.
    pub new_index: usize,
}

impl CardMoved {
    /// Returns `true` if the card changed column.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipeboard_kanban::CardMoved;
    /// use pipeboard_protocol::ItemId;
    ///
    /// let moved = CardMoved {
    ///     card_id: ItemId::from("p1"),
    ///     from_column: ItemId::from("all"),
    ///     to_column: ItemId::from("hired"),
    ///     new_index: 0,
    /// };
    /// assert!(moved.is_cross_column());
    /// ```
    #[must_use]
    pub fn is_cross_column(&self) -> bool {
        self.from_column != self.to_column
    }
}

/// Receives a callback after each committed board mutation.
///
/// Closures taking `&CardMoved` implement this trait, which is convenient
/// for tests:
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use pipeboard_kanban::{CardMoved, DragController};
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
///
/// let mut controller = DragController::default();
/// controller.subscribe(move |event: &CardMoved| sink.borrow_mut().push(event.clone()));
/// assert!(seen.borrow().is_empty());
/// ```
pub trait BoardObserver {
    /// Called once per committed move, after the board has been updated.
    fn card_moved(&mut self, event: &CardMoved);
}

impl<F> BoardObserver for F
where
    F: FnMut(&CardMoved),
{
    fn card_moved(&mut self, event: &CardMoved) {
        self(event);
    }
}

/// Observer that records every committed move in the log.
///
/// This is what a persistence call would replace.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl BoardObserver for TracingObserver {
    fn card_moved(&mut self, event: &CardMoved) {
        info!(
            card = %event.card_id,
            from = %event.from_column,
            to = %event.to_column,
            index = event.new_index,
            "application moved"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reorder_is_not_cross_column() {
        let moved = CardMoved {
            card_id: CardId::from("p1"),
            from_column: ColumnId::from("all"),
            to_column: ColumnId::from("all"),
            new_index: 2,
        };
        assert!(!moved.is_cross_column());
    }

    #[test]
    fn closures_are_observers() {
        let mut count = 0;
        {
            let mut observer = |_: &CardMoved| count += 1;
            let event = CardMoved {
                card_id: CardId::from("p1"),
                from_column: ColumnId::from("a"),
                to_column: ColumnId::from("b"),
                new_index: 0,
            };
            observer.card_moved(&event);
            observer.card_moved(&event);
        }
        assert_eq!(count, 2);
    }
}
