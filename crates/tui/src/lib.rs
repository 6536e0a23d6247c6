//! Terminal UI for the pipeboard application.
//!
//! This crate provides a Ratatui-based terminal interface for moving
//! job applications through a hiring pipeline.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Selection, focus and status state
//! - [`layout`]: Screen geometry shared by rendering and hit-testing
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Keyboard and mouse mappings
//! - [`widgets`]: Board, card, detail, help and status bar rendering
//!
//! # Example
//!
//! ```no_run
//! use pipeboard_kanban::StaticSource;
//! use pipeboard_protocol::{PageRequest, ViewerContext, dummy::demo_board};
//! use pipeboard_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let source = StaticSource::new(demo_board());
//!     let mut app = App::new(source, PageRequest::default(), ViewerContext::default());
//!     app.refresh();
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::{AppState, Focus, StatusKind, StatusMessage};
