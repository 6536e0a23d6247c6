//! Application detail screen widget.
//!
//! Shows everything the snapshot carries about one applicant, with the
//! pipeline stage the card currently sits in.

use pipeboard_protocol::Card;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Placeholder for fields the snapshot leaves out.
const NOT_PROVIDED: &str = "not provided";

/// Width of the field label column.
const LABEL_WIDTH: usize = 13;

/// Returns the `(label, value)` rows shown for an applicant.
///
/// # Examples
///
/// ```
/// use pipeboard_protocol::Card;
/// use pipeboard_tui::widgets::detail_fields;
///
/// let card = Card::new("p1", "Ada Lovelace");
/// let fields = detail_fields(&card, "Shortlisted");
/// assert_eq!(fields[0], ("Stage", "Shortlisted".to_string()));
/// assert!(fields.iter().any(|(label, value)| *label == "CV" && value == "not provided"));
/// ```
#[must_use]
pub fn detail_fields(card: &Card, stage: &str) -> Vec<(&'static str, String)> {
    let applicant = &card.applicant;
    let optional = |value: &Option<String>| {
        value
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(NOT_PROVIDED)
            .to_string()
    };

    vec![
        ("Stage", stage.to_string()),
        (
            "Applied",
            applicant.applied_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        ),
        ("Job type", optional(&applicant.job_type)),
        ("Gender", optional(&applicant.gender)),
        ("Nationality", optional(&applicant.nationality)),
        ("Education", optional(&applicant.education)),
        ("Experience", optional(&applicant.experience)),
        ("CV", optional(&applicant.cv_url)),
        ("Avatar", optional(&applicant.avatar_url)),
    ]
}

/// Renders the full-screen application detail view to the buffer.
///
/// ```text
/// ╭ Ada Lovelace ─────────────────────────────╮
/// │Stage        Shortlisted                   │
/// │Applied      2025-03-01 09:00 UTC          │
/// │Job type     Full-time                     │
/// │...                                        │
/// │───────────────────────────────────────────│
/// │[Esc] Back to board  [o] Open CV           │
/// ╰───────────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use pipeboard_protocol::Card;
/// use pipeboard_tui::widgets::render_detail_panel;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let card = Card::new("p1", "Ada Lovelace");
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_detail_panel(&card, "All applicants", area, &mut buf);
/// ```
pub fn render_detail_panel(card: &Card, stage: &str, area: Rect, buf: &mut Buffer) {
    // Skip rendering if area is too small
    if area.width < 20 || area.height < 6 {
        return;
    }

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", card.applicant.full_name),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    block.render(area, buf);

    let [fields_area, separator_area, footer_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    render_fields(card, stage, fields_area, buf);
    render_separator(separator_area, buf);
    render_footer(card, footer_area, buf);
}

fn render_fields(card: &Card, stage: &str, area: Rect, buf: &mut Buffer) {
    let label_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line<'static>> = detail_fields(card, stage)
        .into_iter()
        .map(|(label, value)| {
            let value_style = if value == NOT_PROVIDED {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(format!("{label:<LABEL_WIDTH$}"), label_style),
                Span::styled(value, value_style),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

fn render_separator(area: Rect, buf: &mut Buffer) {
    let width = area.width as usize;
    Paragraph::new(Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(Color::DarkGray),
    )))
    .render(area, buf);
}

fn render_footer(card: &Card, area: Rect, buf: &mut Buffer) {
    let mut spans = vec![
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::styled(" Back to board", Style::default().fg(Color::DarkGray)),
    ];

    if card.applicant.cv_url.is_some() {
        spans.push(Span::styled("  ", Style::default()));
        spans.push(Span::styled("[o]", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(" Open CV", Style::default().fg(Color::DarkGray)));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}
