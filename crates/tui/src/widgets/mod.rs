//! Widget components for the pipeboard TUI.
//!
//! This module provides reusable rendering functions for the pipeline board,
//! organized into focused submodules for each visual component.
//!
//! # Overview
//!
//! Each widget is a plain function that renders borrowed state into a
//! buffer. Geometry comes from [`crate::layout`], which pointer hit-testing
//! shares.
//!
//! # Modules
//!
//! - [`board`]: Renders every column side by side
//! - [`column`]: Renders one column with its title, count and cards
//! - [`card`]: Renders an application card
//! - [`detail`]: Renders the full-screen application view
//! - [`status_bar`]: Renders the footer with messages and keybinding hints
//! - [`help`]: Renders the help overlay
//!
//! # Card emphasis
//!
//! | Emphasis | Border |
//! |----------|--------|
//! | `Normal` | Gray |
//! | `Selected` | Cyan |
//! | `DropTarget` | Yellow |
//! | `Dragging` | Magenta, double line |
//!
//! # Example
//!
//! ```
//! use pipeboard_protocol::dummy::demo_board;
//! use pipeboard_tui::layout::BoardView;
//! use pipeboard_tui::widgets;
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//!
//! let board = demo_board();
//! let area = Rect::new(0, 0, 80, 24);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_board(&board, &BoardView::default(), area, &mut buf);
//! ```

pub mod board;
pub mod card;
pub mod column;
pub mod detail;
pub mod help;
pub mod status_bar;

// Re-export primary rendering functions for convenience
pub use board::render_board;
pub use card::{CardEmphasis, card_subtitle, render_card};
pub use column::{column_header, render_column};
pub use detail::{detail_fields, render_detail_panel};
pub use help::render_help_overlay;
pub use status_bar::{Hints, render_status_bar};
