//! Event types delivered to components

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// The event payload handed to `Component::handle_event`
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Keyboard event
    Key(KeyEvent),
    /// Mouse event (clicks, drags, moves)
    Mouse(MouseEvent),
    /// Scroll event with position and delta
    Scroll { column: u16, row: u16, delta: isize },
    /// Terminal resize
    Resize(u16, u16),
    /// Periodic tick for animations (spinners)
    Tick,
}

impl EventKind {
    /// Position of a left-button press, if this is one
    ///
    /// Widgets treat a left press as a click; releases and drags are ignored.
    pub fn left_click(&self) -> Option<(u16, u16)> {
        match self {
            EventKind::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                Some((mouse.column, mouse.row))
            }
            _ => None,
        }
    }

    /// Check if this is a global event (quit keys and resizes)
    pub fn is_global(&self) -> bool {
        match self {
            EventKind::Key(key) => {
                key.modifiers.contains(KeyModifiers::CONTROL)
                    && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
            }
            EventKind::Resize(_, _) => true,
            _ => false,
        }
    }
}

/// Check whether a terminal cell lies inside a rect
pub fn rect_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
