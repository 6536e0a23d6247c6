//! Application card rendering widget.
//!
//! A card shows the applicant's name, then the job type and application
//! date. The border colour reflects the card's role on screen.

use pipeboard_protocol::Card;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// How a card is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardEmphasis {
    /// Plain card.
    #[default]
    Normal,
    /// The selected card.
    Selected,
    /// Drop target of a keyboard drag.
    DropTarget,
    /// The card being dragged.
    Dragging,
}

impl CardEmphasis {
    /// Border colour for this emphasis.
    #[must_use]
    pub const fn border_color(self) -> Color {
        match self {
            Self::Normal => Color::DarkGray,
            Self::Selected => Color::Cyan,
            Self::DropTarget => Color::Yellow,
            Self::Dragging => Color::Magenta,
        }
    }
}

/// Renders an application card to the buffer.
///
/// ```text
/// ┌──────────────────────┐
/// │Amina Diallo          │
/// │Full-time · 2025-03-01│
/// └──────────────────────┘
/// ```
///
/// # Examples
///
/// ```
/// use pipeboard_protocol::Card;
/// use pipeboard_tui::widgets::{CardEmphasis, render_card};
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let card = Card::new("p1", "Ada Lovelace");
/// let area = Rect::new(0, 0, 20, 4);
/// let mut buf = Buffer::empty(area);
///
/// render_card(&card, CardEmphasis::Selected, area, &mut buf);
/// ```
pub fn render_card(card: &Card, emphasis: CardEmphasis, area: Rect, buf: &mut Buffer) {
    // Skip rendering if area is too small
    if area.width < 4 || area.height < 3 {
        return;
    }

    let (name_style, detail_style) = match emphasis {
        CardEmphasis::Normal => (
            Style::default().fg(Color::White),
            Style::default().fg(Color::DarkGray),
        ),
        CardEmphasis::Dragging => (
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            Style::default().fg(Color::Gray),
        ),
        CardEmphasis::Selected | CardEmphasis::DropTarget => (
            Style::default()
                .fg(emphasis.border_color())
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        ),
    };
    let border_type = if emphasis == CardEmphasis::Dragging {
        BorderType::Double
    } else {
        BorderType::Plain
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let content = vec![
        Line::from(Span::styled(
            truncate_string(&card.applicant.full_name, inner_width),
            name_style,
        )),
        Line::from(Span::styled(
            truncate_string(&card_subtitle(card), inner_width),
            detail_style,
        )),
    ];

    Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(emphasis.border_color())),
        )
        .render(area, buf);
}

/// Second line of a card: job type and application date.
#[must_use]
pub fn card_subtitle(card: &Card) -> String {
    let applied = card.applicant.applied_at.format("%Y-%m-%d");
    match card.applicant.job_type.as_deref() {
        Some(job) if !job.is_empty() => format!("{job} · {applied}"),
        _ => applied.to_string(),
    }
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
pub(crate) fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}
