//! Application state management.
//!
//! This module defines the view state of the TUI: focus, selection and the
//! status line. The board itself belongs to the drag controller, so every
//! method that needs it borrows it.

use pipeboard_protocol::{Board, Card, CardId, Column, ItemId};

use crate::layout::BoardView;

/// The current focus area in the UI.
///
/// Determines which UI component receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Focus is on the board columns.
    #[default]
    Board,
    /// Focus is on the application detail view.
    Detail,
}

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Informational.
    Info,
    /// Something failed.
    Error,
}

/// A message shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Message text.
    pub text: String,
    /// Severity.
    pub kind: StatusKind,
}

impl StatusMessage {
    /// Creates an informational message.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    /// Creates an error message.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

/// The application view state.
///
/// # Examples
///
/// ```
/// use pipeboard_protocol::dummy::demo_board;
/// use pipeboard_tui::AppState;
///
/// let board = demo_board();
/// let mut state = AppState::new();
/// assert!(state.selected_card(&board).is_none());
///
/// state.navigate_down(&board);
/// assert!(state.selected_card(&board).is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Current focus area.
    pub focus: Focus,
    /// Index of the focused column.
    pub selected_column: usize,
    /// Index of the selected card within the focused column, if any.
    pub selected_card: Option<usize>,
    /// Card in the focused column targeted by a keyboard drag.
    pub hover_card: Option<usize>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Latest status message.
    pub status: Option<StatusMessage>,
}

impl AppState {
    /// Creates a new state with focus on the first column and nothing
    /// selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::take(&mut self.help_visible)
    }

    /// Sets the status message.
    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    /// Moves the column selection to the left, wrapping around if needed.
    pub fn navigate_left(&mut self, board: &Board) {
        let count = board.columns.len();
        if count == 0 {
            return;
        }
        self.selected_column = if self.selected_column == 0 {
            count - 1
        } else {
            self.selected_column - 1
        };
        self.clamp_selection(board);
    }

    /// Moves the column selection to the right, wrapping around if needed.
    pub fn navigate_right(&mut self, board: &Board) {
        let count = board.columns.len();
        if count == 0 {
            return;
        }
        self.selected_column = (self.selected_column + 1) % count;
        self.clamp_selection(board);
    }

    /// Moves the card selection up within the focused column, wrapping to
    /// the bottom.
    pub fn navigate_up(&mut self, board: &Board) {
        let len = self.focused_len(board);
        if len == 0 {
            self.selected_card = None;
            return;
        }

        self.selected_card = match self.selected_card {
            Some(idx) if idx > 0 => Some(idx - 1),
            Some(_) => Some(len - 1),
            None => Some(0),
        };
    }

    /// Moves the card selection down within the focused column, wrapping to
    /// the top.
    pub fn navigate_down(&mut self, board: &Board) {
        let len = self.focused_len(board);
        if len == 0 {
            self.selected_card = None;
            return;
        }

        self.selected_card = match self.selected_card {
            Some(idx) if idx + 1 < len => Some(idx + 1),
            Some(_) | None => Some(0),
        };
    }

    /// Moves the drop target of a keyboard drag within the focused column.
    ///
    /// Unlike selection this does not wrap. Returns the targeted card.
    pub fn move_hover<'b>(&mut self, board: &'b Board, delta: isize) -> Option<&'b Card> {
        let column = self.focused_column(board)?;
        if column.is_empty() {
            self.hover_card = None;
            return None;
        }
        let start = self.hover_card.or(self.selected_card).unwrap_or(0);
        let target = start
            .saturating_add_signed(delta)
            .min(column.cards.len() - 1);
        self.hover_card = Some(target);
        column.cards.get(target)
    }

    /// Returns the focused column, if the board has any.
    #[must_use]
    pub fn focused_column<'b>(&self, board: &'b Board) -> Option<&'b Column> {
        board.columns.get(self.selected_column)
    }

    /// Returns the selected card, if any.
    ///
    /// Returns `None` if nothing is selected or the selection is stale.
    #[must_use]
    pub fn selected_card<'b>(&self, board: &'b Board) -> Option<&'b Card> {
        self.focused_column(board)?
            .cards
            .get(self.selected_card?)
    }

    /// Moves the selection onto the given card, wherever it is.
    ///
    /// Returns `false` and leaves the selection alone if the card is not on
    /// the board.
    pub fn select_card(&mut self, board: &Board, card_id: &CardId) -> bool {
        let found = board.columns.iter().enumerate().find_map(|(c, column)| {
            column.position(card_id).map(|index| (c, index))
        });
        match found {
            Some((column, index)) => {
                self.selected_column = column;
                self.selected_card = Some(index);
                true
            }
            None => false,
        }
    }

    /// Clears the current card selection.
    pub fn clear_selection(&mut self) {
        self.selected_card = None;
        self.hover_card = None;
    }

    /// Opens the detail view for the selected card.
    ///
    /// Returns `false` if no card is selected.
    pub fn open_detail(&mut self, board: &Board) -> bool {
        if self.selected_card(board).is_some() {
            self.focus = Focus::Detail;
            true
        } else {
            false
        }
    }

    /// Returns to the board from the detail view.
    pub fn close_detail(&mut self) {
        self.focus = Focus::Board;
    }

    /// Ensures the selection is valid for the current board.
    ///
    /// Called whenever the board is replaced or mutated.
    pub fn clamp_selection(&mut self, board: &Board) {
        let count = board.columns.len();
        if count == 0 {
            self.selected_column = 0;
            self.clear_selection();
            self.focus = Focus::Board;
            return;
        }
        self.selected_column = self.selected_column.min(count - 1);

        let len = self.focused_len(board);
        let clamp = |idx: Option<usize>| match idx {
            _ if len == 0 => None,
            Some(idx) => Some(idx.min(len - 1)),
            None => None,
        };
        self.selected_card = clamp(self.selected_card);
        self.hover_card = clamp(self.hover_card);

        if self.focus == Focus::Detail && self.selected_card.is_none() {
            self.focus = Focus::Board;
        }
    }

    /// Builds the rendering view of this state.
    #[must_use]
    pub fn board_view<'a>(&self, dragging: Option<&'a ItemId>) -> BoardView<'a> {
        BoardView {
            selected_column: self.selected_column,
            selected_card: self.selected_card,
            hover_card: self.hover_card,
            dragging,
        }
    }

    fn focused_len(&self, board: &Board) -> usize {
        self.focused_column(board).map_or(0, Column::count)
    }
}
