//! Pipeline column rendering widget.
//!
//! A column shows its title with a live card count, then a vertical list of
//! application cards. Adjacent columns share a border.

use pipeboard_protocol::Column;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use super::card::{CardEmphasis, render_card};
use crate::layout::{BoardView, ColumnPosition, card_slots, column_inner};

/// Border set for the first (leftmost) column: rounded corners on left, no right border.
const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for middle columns: T-connectors on left, no right border.
const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",
    top_right: "─",
    bottom_left: "┴",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for the last (rightmost) column: T-connectors on left, rounded on right.
const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Header text of a column: title and card count.
///
/// The count is always the length of the card list.
///
/// # Examples
///
/// ```
/// use pipeboard_protocol::{Card, Column};
/// use pipeboard_tui::widgets::column_header;
///
/// let column = Column::new("all", "All applicants").with_cards(vec![Card::new("p1", "Ada")]);
/// assert_eq!(column_header(&column), "All applicants (1)");
/// ```
#[must_use]
pub fn column_header(column: &Column) -> String {
    format!("{} ({})", column.title, column.count())
}

/// Renders a single column to the buffer.
///
/// `index` is the column's position on the board and selects its highlight
/// from `view`. `prev_focused` recolours the border shared with a focused
/// column on the left.
pub fn render_column(
    column: &Column,
    index: usize,
    view: &BoardView<'_>,
    position: ColumnPosition,
    prev_focused: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    let is_focused = view.selected_column == index;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title_style = if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let border_set = match position {
        ColumnPosition::Only => border::ROUNDED,
        ColumnPosition::First => BORDER_SET_FIRST,
        ColumnPosition::Middle => BORDER_SET_MIDDLE,
        ColumnPosition::Last => BORDER_SET_LAST,
    };

    let block = Block::default()
        .title(Span::styled(column_header(column), title_style))
        .borders(position.borders())
        .border_set(border_set)
        .border_style(border_style);
    block.render(area, buf);

    // The left border belongs to this column but is shared with the previous one.
    if prev_focused && !is_focused && area.width > 0 {
        let highlight_style = Style::default().fg(Color::Cyan);
        for y in area.y..area.y.saturating_add(area.height) {
            if let Some(cell) = buf.cell_mut((area.x, y)) {
                cell.set_style(highlight_style);
            }
        }
    }

    let inner = column_inner(area, position);
    if column.is_empty() {
        render_empty_placeholder(inner, buf);
        return;
    }

    for slot in card_slots(inner, column.cards.len(), view.scroll_anchor(index)) {
        let card = &column.cards[slot.index];
        let emphasis = if view.dragging == Some(&card.id) {
            CardEmphasis::Dragging
        } else if is_focused && view.hover_card == Some(slot.index) {
            CardEmphasis::DropTarget
        } else if is_focused && view.dragging.is_none() && view.selected_card == Some(slot.index)
        {
            CardEmphasis::Selected
        } else {
            CardEmphasis::Normal
        };
        render_card(card, emphasis, slot.area, buf);
    }
}

/// Renders a placeholder message for empty columns.
fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::from(Span::styled(
        "No applications",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )))
    .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use pipeboard_protocol::{Card, ItemId};

    #[test]
    fn render_empty_column() {
        let column = Column::new("hired", "Hired");
        let area = Rect::new(0, 0, 20, 15);
        let mut buf = Buffer::empty(area);

        render_column(
            &column,
            1,
            &BoardView::default(),
            ColumnPosition::First,
            false,
            area,
            &mut buf,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("Hired (0)"));
        assert!(content.contains("No applications"));
    }

    #[test]
    fn render_column_with_cards() {
        let column = Column::new("all", "All")
            .with_cards(vec![Card::new("p1", "Ada"), Card::new("p2", "Grace")]);
        let area = Rect::new(0, 0, 25, 15);
        let mut buf = Buffer::empty(area);

        render_column(
            &column,
            0,
            &BoardView::default(),
            ColumnPosition::Middle,
            false,
            area,
            &mut buf,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("All (2)"));
        assert!(content.contains("Ada"));
        assert!(content.contains("Grace"));
        assert_eq!(buf[(0, 0)].symbol(), "┬");
    }

    #[test]
    fn dragged_card_is_marked() {
        let column = Column::new("all", "All").with_cards(vec![Card::new("p1", "Ada")]);
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        let dragged = ItemId::from("p1");
        let view = BoardView {
            dragging: Some(&dragged),
            ..BoardView::default()
        };

        render_column(&column, 0, &view, ColumnPosition::Only, false, area, &mut buf);

        // Card starts inside the column border.
        assert_eq!(buf[(1, 1)].symbol(), "╔");
    }

    #[test]
    fn shared_border_highlighted_when_left_neighbour_focused() {
        let column = Column::new("b", "B");
        let area = Rect::new(0, 0, 20, 6);
        let mut buf = Buffer::empty(area);
        let view = BoardView {
            selected_column: 0,
            ..BoardView::default()
        };

        render_column(&column, 1, &view, ColumnPosition::Last, true, area, &mut buf);

        assert_eq!(buf[(0, 3)].fg, Color::Cyan);
        assert_eq!(buf[(19, 3)].fg, Color::DarkGray);
    }
}
