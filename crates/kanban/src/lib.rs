//! Board state and drag handling for the pipeboard application pipeline.
//!
//! This crate owns the mutable side of the board: the [`BoardStore`] holding
//! the canonical column/card arrangement, and the [`DragController`] that
//! turns drag events into moves. Snapshots come in through a
//! [`SnapshotSource`]; committed moves go out through [`BoardObserver`]s.
//!
//! # Overview
//!
//! - [`store`]: Board state store (queries plus crate-private mutations)
//! - [`drag`]: Drag session state machine
//! - [`observer`]: Move notifications
//! - [`source`]: Snapshot sources and pagination
//! - [`error`]: Error types for snapshot loading
//!
//! # Examples
//!
//! ```
//! use pipeboard_kanban::{DragController, SnapshotSource, StaticSource};
//! use pipeboard_protocol::{ItemId, PageRequest, dummy::demo_board};
//!
//! let source = StaticSource::new(demo_board());
//! let page = source.fetch(&PageRequest::default()).unwrap();
//!
//! let mut controller = DragController::default();
//! controller.initialize(page.data);
//! let total = controller.store().total_cards();
//!
//! controller.drag_start(&ItemId::from("app-101"));
//! controller.drag_over(Some(&ItemId::from("hired")));
//! controller.drag_end(Some(&ItemId::from("hired")));
//!
//! assert_eq!(controller.store().total_cards(), total);
//! ```

pub mod drag;
pub mod error;
pub mod observer;
pub mod source;
pub mod store;

// Re-export primary types at crate root for convenience
pub use drag::{DragController, DragItem, DragSession, DragState};
pub use error::{KanbanError, Result};
pub use observer::{BoardObserver, CardMoved, TracingObserver};
pub use source::{FileSource, SnapshotSource, StaticSource, paginate};
pub use store::BoardStore;


#[cfg(test)]
mod snapshot_tests {
    use insta::assert_snapshot;
    use pipeboard_protocol::{ItemId, PageRequest, dummy::demo_board};

    use super::*;

    #[test]
    fn demo_board_layout() {
        let controller = DragController::new(demo_board());
        assert_snapshot!(controller.board().to_string(), @r"
        all (4): app-101, app-102, app-103, app-104
        shortlisted (2): app-091, app-095
        interview (2): app-080, app-084
        hired (1): app-072
        ");
    }

    #[test]
    fn shortlisting_then_hiring() {
        let mut controller = DragController::new(demo_board());

        controller.drag_start(&ItemId::from("app-102"));
        controller.drag_over(Some(&ItemId::from("shortlisted")));
        controller.drag_over(Some(&ItemId::from("app-072")));
        controller.drag_end(Some(&ItemId::from("app-072")));

        assert_snapshot!(controller.board().to_string(), @r"
        all (3): app-101, app-103, app-104
        shortlisted (2): app-091, app-095
        interview (2): app-080, app-084
        hired (2): app-102, app-072
        ");
    }

    #[test]
    fn static_source_feeds_controller() {
        let source = StaticSource::new(demo_board());
        let request = PageRequest::default();
        let page = source.fetch(&request).expect("static fetch");
        let mut controller = DragController::default();
        controller.initialize(page.data);

        assert_eq!(controller.store().total_cards(), 9);
        assert_eq!(page.meta.page_count, 1);
    }
}
