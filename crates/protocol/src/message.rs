//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input sensors and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the keyboard and pointer sensors and
/// consumed by the application to update state or drive a drag session.
///
/// # Examples
///
/// ```
/// use pipeboard_protocol::Message;
///
/// let msg = Message::NavigateRight;
/// assert!(msg.is_navigation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection to the left column (or drag over it).
    NavigateLeft,
    /// Move selection to the right column (or drag over it).
    NavigateRight,
    /// Move selection up within the current column.
    NavigateUp,
    /// Move selection down within the current column.
    NavigateDown,
    /// Open the selected application, or drop the dragged card.
    Select,
    /// Go back to the board from the detail view.
    Back,
    /// Escape: cancel a drag, close a panel or clear selection (contextual).
    Escape,
    /// Pick up the selected card, or drop the dragged one.
    ToggleDrag,
    /// Quit the application.
    Quit,
    /// Reload the current page from the snapshot source.
    Refresh,
    /// Load the next page.
    NextPage,
    /// Load the previous page.
    PreviousPage,
    /// Flip between newest-first and oldest-first listing.
    ToggleOrder,
    /// Open the selected applicant's CV.
    OpenCv,
    /// Toggle help overlay.
    ToggleHelp,
    /// Left button pressed at coordinates (column, row).
    PointerDown {
        /// Column (x coordinate) of the press.
        column: u16,
        /// Row (y coordinate) of the press.
        row: u16,
    },
    /// Pointer moved with the left button held.
    PointerDrag {
        /// Column (x coordinate) of the pointer.
        column: u16,
        /// Row (y coordinate) of the pointer.
        row: u16,
    },
    /// Left button released at coordinates (column, row).
    PointerUp {
        /// Column (x coordinate) of the release.
        column: u16,
        /// Row (y coordinate) of the release.
        row: u16,
    },
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipeboard_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(!Message::Select.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }

    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message comes from the pointer sensor.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipeboard_protocol::Message;
    ///
    /// assert!(Message::PointerUp { column: 1, row: 2 }.is_pointer());
    /// assert!(!Message::ToggleDrag.is_pointer());
    /// ```
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            Self::PointerDown { .. } | Self::PointerDrag { .. } | Self::PointerUp { .. }
        )
    }

    /// Returns `true` if this message asks for a new snapshot.
    #[must_use]
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            Self::Refresh | Self::NextPage | Self::PreviousPage | Self::ToggleOrder
        )
    }
}
