//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Keyboard and mouse are the two input sensors:
//! both produce [`Message`]s that the application turns into drag events.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use pipeboard_protocol::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// Returns `Some(Message)` if the event maps to an action,
/// or `None` if the event is not handled. Key releases are ignored.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to a pointer message.
///
/// Only the left button drives drags: press, move while held, release.
#[must_use]
fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::PointerDown { column, row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(Message::PointerDrag { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(Message::PointerUp { column, row }),
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// Returns `Some(Message)` if the key event maps to an action,
/// or `None` if the key is not bound.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (cancel drag, close panel or clear selection) |
/// | `Left` / `Right` | Navigate between columns |
/// | `Up` / `Down` | Navigate within a column |
/// | `Enter` | Select |
/// | `Space` | Pick up or drop a card |
/// | `Backspace` | Back |
/// | `r` | Refresh |
/// | `[` / `]` | Previous / next page |
/// | `s` | Toggle sort order |
/// | `o` | Open CV |
/// | `?` | Toggle help |
///
/// # Examples
///
/// ```
/// use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
/// use pipeboard_protocol::Message;
/// use pipeboard_tui::event::key_to_message;
///
/// let key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
/// assert_eq!(key_to_message(key), Some(Message::ToggleDrag));
/// ```
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    // Check for Ctrl+C first
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        // Navigation (arrow keys only)
        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        KeyCode::Enter => Some(Message::Select),
        KeyCode::Char(' ') => Some(Message::ToggleDrag),
        KeyCode::Backspace => Some(Message::Back),

        // Paging
        KeyCode::Char('r') => Some(Message::Refresh),
        KeyCode::Char(']') => Some(Message::NextPage),
        KeyCode::Char('[') => Some(Message::PreviousPage),
        KeyCode::Char('s') => Some(Message::ToggleOrder),

        KeyCode::Char('o') => Some(Message::OpenCv),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn quit_keys() {
        assert_eq!(
            key_to_message(make_key_with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Quit)
        );
        assert_eq!(key_to_message(make_key(KeyCode::Char('q'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Left)),
            Some(Message::NavigateLeft)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Right)),
            Some(Message::NavigateRight)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Up)),
            Some(Message::NavigateUp)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Down)),
            Some(Message::NavigateDown)
        );
    }

    #[test]
    fn select_and_drag_are_separate_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Enter)),
            Some(Message::Select)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char(' '))),
            Some(Message::ToggleDrag)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Backspace)),
            Some(Message::Back)
        );
        assert_eq!(key_to_message(make_key(KeyCode::Esc)), Some(Message::Escape));
    }

    #[test]
    fn paging_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char(']'))),
            Some(Message::NextPage)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('['))),
            Some(Message::PreviousPage)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('s'))),
            Some(Message::ToggleOrder)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('r'))),
            Some(Message::Refresh)
        );
    }

    #[test]
    fn other_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('o'))),
            Some(Message::OpenCv)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('?'))),
            Some(Message::ToggleHelp)
        );
        assert_eq!(key_to_message(make_key(KeyCode::Char('x'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::Tab)), None);
    }

    #[test]
    fn pointer_events() {
        let down = Event::Mouse(make_mouse(MouseEventKind::Down(MouseButton::Left), 3, 4));
        let drag = Event::Mouse(make_mouse(MouseEventKind::Drag(MouseButton::Left), 5, 6));
        let up = Event::Mouse(make_mouse(MouseEventKind::Up(MouseButton::Left), 7, 8));

        assert_eq!(
            event_to_message(&down),
            Some(Message::PointerDown { column: 3, row: 4 })
        );
        assert_eq!(
            event_to_message(&drag),
            Some(Message::PointerDrag { column: 5, row: 6 })
        );
        assert_eq!(
            event_to_message(&up),
            Some(Message::PointerUp { column: 7, row: 8 })
        );
    }

    #[test]
    fn other_mouse_events_are_ignored() {
        let right = Event::Mouse(make_mouse(MouseEventKind::Down(MouseButton::Right), 1, 1));
        let moved = Event::Mouse(make_mouse(MouseEventKind::Moved, 1, 1));
        let scroll = Event::Mouse(make_mouse(MouseEventKind::ScrollDown, 1, 1));

        assert_eq!(event_to_message(&right), None);
        assert_eq!(event_to_message(&moved), None);
        assert_eq!(event_to_message(&scroll), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = make_key(KeyCode::Char(' '));
        key.kind = KeyEventKind::Release;

        assert_eq!(event_to_message(&Event::Key(key)), None);
        assert_eq!(
            event_to_message(&Event::Key(make_key(KeyCode::Char(' ')))),
            Some(Message::ToggleDrag)
        );
    }

    #[test]
    fn resize_is_ignored() {
        assert_eq!(event_to_message(&Event::Resize(80, 24)), None);
    }
}
