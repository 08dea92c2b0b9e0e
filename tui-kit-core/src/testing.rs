//! Test utilities for tui-kit widgets
//!
//! - [`key`]: Create a `KeyEvent` from a string (e.g., `key("ctrl+k")`)
//! - [`key_ev`], [`click`], [`tick`]: ready-made [`EventKind`]s
//! - [`RenderHarness`]: render into a `TestBackend` and read the screen back
//! - Assertion macros for verifying emitted actions
//!
//! # Example
//!
//! ```ignore
//! use tui_kit::testing::{key_ev, RenderHarness};
//!
//! let actions: Vec<_> = table.handle_event(&key_ev("s"), props).into_iter().collect();
//! assert_emitted!(actions, Action::RowsSelect(_));
//!
//! let mut harness = RenderHarness::new(40, 8);
//! let screen = harness.render_to_string_plain(|frame| table.render(frame, frame.area(), props));
//! assert!(screen.contains("Name ▲"));
//! ```

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::{Backend, TestBackend},
    buffer::Buffer,
    layout::Rect,
    Frame, Terminal,
};

use crate::event::EventKind;
use crate::keybindings::parse_key_string;

/// Create a `KeyEvent` from a key string.
///
/// # Examples
///
/// ```
/// use tui_kit_core::testing::key;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let k = key("ctrl+k");
/// assert_eq!(k.code, KeyCode::Char('k'));
/// assert!(k.modifiers.contains(KeyModifiers::CONTROL));
/// ```
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// Create a `KeyEvent` for a character with no modifiers.
///
/// Unlike [`key`], this keeps the character's case.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Create a `KeyEvent` for a character with Ctrl modifier.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Wrap a key string into an [`EventKind::Key`].
pub fn key_ev(s: &str) -> EventKind {
    EventKind::Key(key(s))
}

/// A left-button press at the given cell.
pub fn click(column: u16, row: u16) -> EventKind {
    EventKind::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// An animation tick.
pub fn tick() -> EventKind {
    EventKind::Tick
}

/// Renders into an in-memory terminal for assertions on screen content.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with a `width` x `height` screen.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("TestBackend never fails");
        Self { terminal }
    }

    /// Draw one frame and return the resulting buffer.
    pub fn render(&mut self, f: impl FnOnce(&mut Frame)) -> &Buffer {
        self.terminal.draw(f).expect("TestBackend never fails");
        self.terminal.backend().buffer()
    }

    /// Draw one frame and return the screen as plain text, one line per row.
    pub fn render_to_string_plain(&mut self, f: impl FnOnce(&mut Frame)) -> String {
        let buffer = self.render(f);
        buffer_to_string_plain(buffer)
    }

    /// The full screen rect.
    pub fn area(&self) -> Rect {
        let size = self.terminal.backend().size().expect("TestBackend never fails");
        Rect::new(0, 0, size.width, size.height)
    }
}

/// Convert a buffer to plain text, trimming trailing spaces on each row.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| row_text(buffer, y))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text of a single buffer row with trailing spaces trimmed.
pub fn row_text(buffer: &Buffer, y: u16) -> String {
    let area = buffer.area;
    let mut line = String::new();
    for x in area.x..area.x + area.width {
        line.push_str(buffer[(x, y)].symbol());
    }
    line.trim_end().to_string()
}

/// Assert that a specific action was emitted.
///
/// # Example
///
/// ```ignore
/// assert_emitted!(actions, Action::NameChange(_));
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that a specific action was NOT emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Count how many actions match a pattern.
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_key_simple() {
        let k = key("q");
        assert_eq!(k.code, KeyCode::Char('q'));
        assert_eq!(k.modifiers, KeyModifiers::empty());
    }

    #[test]
    fn test_char_key_keeps_case() {
        assert_eq!(char_key('G').code, KeyCode::Char('G'));
    }

    #[test]
    fn test_click() {
        assert_eq!(click(5, 2).left_click(), Some((5, 2)));
    }

    #[test]
    fn test_render_harness() {
        let mut harness = RenderHarness::new(12, 2);
        let output = harness.render_to_string_plain(|frame| {
            frame.render_widget(Paragraph::new("hello\nworld"), frame.area());
        });
        assert_eq!(output, "hello\nworld");
        assert_eq!(harness.area(), Rect::new(0, 0, 12, 2));
    }

    #[derive(Debug, PartialEq)]
    enum TestAction {
        Foo,
        Bar(i32),
    }

    #[test]
    fn test_assert_macros() {
        let actions = vec![TestAction::Foo, TestAction::Bar(42)];

        assert_emitted!(actions, TestAction::Foo);
        assert_emitted!(actions, TestAction::Bar(n) if *n == 42);
        assert_not_emitted!(actions, TestAction::Bar(99));
        assert_eq!(count_emitted!(actions, TestAction::Bar(_)), 1);
    }
}
