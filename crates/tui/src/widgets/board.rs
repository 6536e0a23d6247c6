//! Pipeline board rendering widget.
//!
//! This module renders every column of the board side by side, in board
//! order, with equal widths.

use pipeboard_protocol::Board;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::column::render_column;
use crate::layout::{BoardView, ColumnPosition, column_areas};

/// Renders the complete board to the buffer.
///
/// The board shows one column per pipeline stage, arranged horizontally.
/// The focused column and its selected card are highlighted according to
/// `view`. A board without columns renders a placeholder instead.
///
/// # Layout
///
/// ```text
/// ╭All (1)────┬Short (1)──┬Hired (0)──╮
/// │┌────────┐ │┌────────┐ │No applicat│
/// ││Ada     │ ││Grace   │ │           │
/// │└────────┘ │└────────┘ │           │
/// ╰───────────┴───────────┴───────────╯
/// ```
///
/// # Examples
///
/// ```
/// use pipeboard_protocol::dummy::demo_board;
/// use pipeboard_tui::layout::BoardView;
/// use pipeboard_tui::widgets::render_board;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let board = demo_board();
/// let area = Rect::new(0, 0, 100, 20);
/// let mut buf = Buffer::empty(area);
///
/// render_board(&board, &BoardView::default(), area, &mut buf);
/// ```
pub fn render_board(board: &Board, view: &BoardView<'_>, area: Rect, buf: &mut Buffer) {
    if board.is_empty() {
        render_empty_board(area, buf);
        return;
    }

    let count = board.columns.len();
    for (i, (column, column_area)) in board
        .columns
        .iter()
        .zip(column_areas(area, count))
        .enumerate()
    {
        let prev_focused = i > 0 && view.selected_column == i - 1;
        render_column(
            column,
            i,
            view,
            ColumnPosition::of(i, count),
            prev_focused,
            column_area,
            buf,
        );
    }
}

fn render_empty_board(area: Rect, buf: &mut Buffer) {
    let message = Line::from(Span::styled(
        "No applications",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    ));

    Paragraph::new(message)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use pipeboard_protocol::{Card, Column};

    #[test]
    fn render_empty_board_shows_placeholder() {
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);

        render_board(&Board::default(), &BoardView::default(), area, &mut buf);

        assert!(buffer_to_string(&buf).contains("No applications"));
    }

    #[test]
    fn render_board_shows_every_column_with_counts() {
        let board = Board::new(vec![
            Column::new("all", "All").with_cards(vec![
                Card::new("p1", "Ada"),
                Card::new("p2", "Grace"),
            ]),
            Column::new("shortlisted", "Short"),
            Column::new("hired", "Hired"),
        ]);
        let area = Rect::new(0, 0, 90, 20);
        let mut buf = Buffer::empty(area);

        render_board(&board, &BoardView::default(), area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("All (2)"));
        assert!(content.contains("Short (0)"));
        assert!(content.contains("Hired (0)"));
        assert_eq!(buf[(0, 0)].symbol(), "╭");
        assert_eq!(buf[(89, 0)].symbol(), "╮");
    }

    #[test]
    fn render_board_narrow_terminal() {
        let board = pipeboard_protocol::dummy::demo_board();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);

        // Should not panic with narrow area
        render_board(&board, &BoardView::default(), area, &mut buf);
    }
}
