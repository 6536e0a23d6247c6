//! Status bar rendering widget.
//!
//! The footer shows the latest status message, if any, followed by the
//! keybinding hints for the current mode.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::state::{StatusKind, StatusMessage};

/// Which set of keybinding hints to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hints {
    /// Browsing the board.
    Board,
    /// Carrying a card with the keyboard.
    Dragging,
    /// Viewing an application.
    Detail,
}

impl Hints {
    fn bindings(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Board => &[
                ("Ctrl+C", "Quit"),
                ("←→↑↓", "Navigate"),
                ("Space", "Move"),
                ("[ ]", "Page"),
                ("?", "Help"),
            ],
            Self::Dragging => &[
                ("←→", "Column"),
                ("↑↓", "Position"),
                ("Space", "Drop"),
                ("Esc", "Cancel"),
            ],
            Self::Detail => &[("Esc", "Back"), ("o", "Open CV"), ("Ctrl+C", "Quit")],
        }
    }
}

/// Renders the status bar.
///
/// # Layout
///
/// ```text
/// +----------------------------------------------------+
/// | Loaded 9 applications  |  Ctrl+C Quit  ←→↑↓ Nav... |
/// +----------------------------------------------------+
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use pipeboard_tui::state::StatusMessage;
/// use pipeboard_tui::widgets::{Hints, render_status_bar};
///
/// let area = Rect::new(0, 0, 80, 3);
/// let mut buf = Buffer::empty(area);
///
/// let message = StatusMessage::info("Moved Ada to Hired");
/// render_status_bar(Some(&message), Hints::Board, area, &mut buf);
/// ```
pub fn render_status_bar(
    message: Option<&StatusMessage>,
    hints: Hints,
    area: Rect,
    buf: &mut Buffer,
) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let mut spans = Vec::new();
    if let Some(message) = message {
        let message_style = match message.kind {
            StatusKind::Info => Style::default().fg(Color::Cyan),
            StatusKind::Error => Style::default().fg(Color::Red),
        };
        spans.push(Span::styled(message.text.clone(), message_style));
        spans.push(Span::styled("  |  ", text_style));
    }

    for (i, (key, action)) in hints.bindings().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", text_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {action}"), text_style));
    }

    Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}
