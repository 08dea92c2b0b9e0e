//! Single-line text field with label, helper text and inline affordances
//!
//! The host owns the value. Every change, whether typed or produced by the
//! clear button, arrives through `on_change` as a [`ValueChange`].

mod editor;

pub use editor::EditCursor;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};
use tracing::debug;
use tui_kit_core::{rect_contains, Component, EventKind};

use crate::theme::Theme;

/// Frames cycled by the loading spinner, one per tick
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
pub const CLEAR_GLYPH: &str = "×";
pub const MASK_CHAR: char = '•';
const SHOW_LABEL: &str = "show";
const HIDE_LABEL: &str = "hide";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// Solid `input_bg` fill, no border
    Filled,
    #[default]
    Outlined,
    /// No fill, no border
    Ghost,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    /// Columns between the box edge and the text
    pub fn padding_x(self) -> u16 {
        match self {
            Size::Small => 1,
            Size::Medium => 2,
            Size::Large => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Search,
}

impl InputType {
    fn accepts(self, c: char) -> bool {
        match self {
            InputType::Number => c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'),
            _ => !c.is_control(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeSource {
    /// Keystroke editing
    Edit,
    /// The clear button
    Clear,
}

/// The single notification type for value changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueChange {
    pub value: String,
    pub source: ChangeSource,
}

impl ValueChange {
    pub fn edit(value: String) -> Self {
        Self {
            value,
            source: ChangeSource::Edit,
        }
    }

    pub fn cleared() -> Self {
        Self {
            value: String::new(),
            source: ChangeSource::Clear,
        }
    }
}

/// What a screen reader would be told about the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSemantics<'a> {
    pub label: Option<&'a str>,
    /// The visible auxiliary text (error or helper)
    pub description: Option<&'a str>,
    pub invalid: bool,
    pub disabled: bool,
    pub masked: bool,
}

/// Props for InputField component
pub struct InputFieldProps<'a, A> {
    pub value: &'a str,
    pub on_change: fn(ValueChange) -> A,
    pub label: Option<&'a str>,
    /// Shown when the value is empty
    pub placeholder: &'a str,
    pub helper_text: Option<&'a str>,
    /// Replaces the helper text while `invalid`
    pub error_message: Option<&'a str>,
    pub disabled: bool,
    pub invalid: bool,
    pub variant: Variant,
    pub size: Size,
    /// Disables the field and swaps the affordances for a spinner
    pub loading: bool,
    pub input_type: InputType,
    pub clearable: bool,
    pub password_toggle: bool,
    pub is_focused: bool,
    pub theme: Theme,
}

impl<'a, A> InputFieldProps<'a, A> {
    pub fn new(value: &'a str, on_change: fn(ValueChange) -> A) -> Self {
        Self {
            value,
            on_change,
            label: None,
            placeholder: "",
            helper_text: None,
            error_message: None,
            disabled: false,
            invalid: false,
            variant: Variant::default(),
            size: Size::default(),
            loading: false,
            input_type: InputType::default(),
            clearable: false,
            password_toggle: false,
            is_focused: false,
            theme: Theme::default(),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    /// Error message while invalid, otherwise helper text
    pub fn aux_text(&self) -> Option<&'a str> {
        match self.error_message {
            Some(error) if self.invalid => Some(error),
            _ => self.helper_text,
        }
    }

    pub fn shows_clear(&self) -> bool {
        self.clearable && !self.value.is_empty() && !self.loading
    }

    pub fn shows_toggle(&self) -> bool {
        self.input_type == InputType::Password && self.password_toggle && !self.loading
    }
}

impl<A> Clone for InputFieldProps<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for InputFieldProps<'_, A> {}

/// A single-line input field
///
/// The only state that matters to the host is `password_visible`; the rest
/// is terminal bookkeeping (cursor, spinner frame, button positions).
#[derive(Default)]
pub struct InputField {
    cursor: EditCursor,
    password_visible: bool,
    spinner_frame: usize,
    clear_rect: Option<Rect>,
    toggle_rect: Option<Rect>,
}

impl InputField {
    /// Create a new InputField
    pub fn new() -> Self {
        Self::default()
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn cursor(&self) -> usize {
        self.cursor.offset()
    }

    pub fn semantics<'a, A>(&self, props: &InputFieldProps<'a, A>) -> FieldSemantics<'a> {
        FieldSemantics {
            label: props.label,
            description: props.aux_text(),
            invalid: props.invalid,
            disabled: props.is_disabled(),
            masked: self.is_masked(props),
        }
    }

    /// Rows needed to render with `props`
    pub fn height<A>(props: &InputFieldProps<'_, A>) -> u16 {
        let label = u16::from(props.label.is_some());
        let aux = u16::from(props.aux_text().is_some());
        label + box_height(props.variant, props.size) + aux
    }

    fn is_masked<A>(&self, props: &InputFieldProps<'_, A>) -> bool {
        props.input_type == InputType::Password && !self.password_visible
    }

    /// Clear button activation
    fn clear<A>(&mut self, props: InputFieldProps<'_, A>) -> Option<A> {
        if !props.shows_clear() {
            return None;
        }
        self.cursor.home();
        debug!(label = props.label.unwrap_or_default(), "Input cleared");
        Some((props.on_change)(ValueChange::cleared()))
    }

    fn toggle_visibility<A>(&mut self, props: InputFieldProps<'_, A>) {
        if !props.shows_toggle() {
            return;
        }
        self.password_visible = !self.password_visible;
        debug!(visible = self.password_visible, "Password visibility toggled");
    }

    fn handle_key<A>(&mut self, key: &KeyEvent, props: InputFieldProps<'_, A>) -> Option<A> {
        let value = props.value;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl {
            match key.code {
                KeyCode::Char('k') => return self.clear(props),
                KeyCode::Char('r') => {
                    self.toggle_visibility(props);
                    return None;
                }
                _ => {}
            }
        }

        if props.is_disabled() {
            return None;
        }
        let change = |v: String| (props.on_change)(ValueChange::edit(v));

        if ctrl {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor.home();
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor.end(value);
                    None
                }
                KeyCode::Char('u') if !value.is_empty() => {
                    self.cursor.home();
                    Some(change(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) if props.input_type.accepts(c) => {
                Some(change(self.cursor.insert(value, c)))
            }
            KeyCode::Backspace => self.cursor.backspace(value).map(change),
            KeyCode::Delete => self.cursor.delete(value).map(change),
            KeyCode::Left => {
                self.cursor.left(value);
                None
            }
            KeyCode::Right => {
                self.cursor.right(value);
                None
            }
            KeyCode::Home => {
                self.cursor.home();
                None
            }
            KeyCode::End => {
                self.cursor.end(value);
                None
            }
            _ => None,
        }
    }

    fn handle_click<A>(&mut self, x: u16, y: u16, props: InputFieldProps<'_, A>) -> Option<A> {
        let hit = |rect: Option<Rect>| rect.is_some_and(|r| rect_contains(r, x, y));
        if hit(self.clear_rect) {
            return self.clear(props);
        }
        if hit(self.toggle_rect) {
            self.toggle_visibility(props);
        }
        None
    }
}

fn box_height(variant: Variant, size: Size) -> u16 {
    let base = match variant {
        Variant::Outlined => 3,
        Variant::Filled | Variant::Ghost => 1,
    };
    if size == Size::Large {
        base + 2
    } else {
        base
    }
}

impl<A> Component<A> for InputField {
    type Props<'a> = InputFieldProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        self.cursor.clamp(props.value);

        match event {
            EventKind::Tick => {
                if props.loading {
                    self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
                }
                None
            }
            EventKind::Key(key) if props.is_focused => self.handle_key(key, props),
            _ => event
                .left_click()
                .and_then(|(x, y)| self.handle_click(x, y, props)),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.cursor.clamp(props.value);
        self.clear_rect = None;
        self.toggle_rect = None;

        let theme = props.theme;
        let disabled = props.is_disabled();
        let mut rest = area;

        // Label
        if let Some(label) = props.label {
            if rest.height == 0 {
                return;
            }
            let style = if disabled {
                Style::default().fg(theme.muted)
            } else {
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)
            };
            frame
                .buffer_mut()
                .set_stringn(rest.x, rest.y, label, rest.width.into(), style);
            rest.y += 1;
            rest.height -= 1;
        }

        // Box
        let box_area = Rect {
            height: box_height(props.variant, props.size).min(rest.height),
            ..rest
        };
        let inner = match props.variant {
            Variant::Outlined => {
                let border = if props.invalid {
                    theme.error
                } else if props.is_focused && !disabled {
                    theme.accent
                } else {
                    theme.border
                };
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border));
                let inner = block.inner(box_area);
                frame.render_widget(block, box_area);
                inner
            }
            Variant::Filled => {
                frame
                    .buffer_mut()
                    .set_style(box_area, Style::default().bg(theme.input_bg));
                box_area
            }
            Variant::Ghost => box_area,
        };

        if inner.height > 0 {
            self.render_content(frame, inner, &props);
        }

        // Auxiliary text
        let aux_y = box_area.y + box_area.height;
        if let Some(text) = props.aux_text() {
            if aux_y < rest.y + rest.height {
                let color = if props.invalid {
                    theme.error
                } else {
                    theme.muted
                };
                frame.buffer_mut().set_stringn(
                    rest.x,
                    aux_y,
                    text,
                    rest.width.into(),
                    Style::default().fg(color),
                );
            }
        }
    }
}

impl InputField {
    /// Text row with trailing affordances, vertically centered in `inner`
    fn render_content<A>(&mut self, frame: &mut Frame, inner: Rect, props: &InputFieldProps<'_, A>) {
        let theme = props.theme;
        let disabled = props.is_disabled();
        let pad = props.size.padding_x().min(inner.width / 2);
        let y = inner.y + inner.height / 2;
        let left = inner.x + pad;
        let mut right = inner.x + inner.width - pad;

        let base = match props.variant {
            Variant::Filled => Style::default().bg(theme.input_bg),
            _ => Style::default(),
        };
        let buf = frame.buffer_mut();

        // Trailing affordances, laid out right to left
        let mut place = |width: u16| -> Option<Rect> {
            if right < left + width {
                return None;
            }
            right -= width;
            let rect = Rect::new(right, y, width, 1);
            right = right.saturating_sub(1);
            Some(rect)
        };

        if props.loading {
            if let Some(rect) = place(1) {
                let glyph = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
                buf.set_string(rect.x, y, glyph, base.fg(theme.accent));
            }
        } else {
            if props.shows_toggle() {
                self.toggle_rect = place(4);
                if let Some(rect) = self.toggle_rect {
                    let label = if self.password_visible {
                        HIDE_LABEL
                    } else {
                        SHOW_LABEL
                    };
                    buf.set_string(rect.x, y, label, base.fg(theme.accent));
                }
            }
            if props.shows_clear() {
                self.clear_rect = place(1);
                if let Some(rect) = self.clear_rect {
                    buf.set_string(rect.x, y, CLEAR_GLYPH, base.fg(theme.muted));
                }
            }
        }

        let width = usize::from(right.saturating_sub(left));
        if width == 0 {
            return;
        }

        if props.value.is_empty() {
            buf.set_stringn(left, y, props.placeholder, width, base.fg(theme.muted));
        } else {
            let shown: String = if self.is_masked(props) {
                props.value.chars().map(|_| MASK_CHAR).collect()
            } else {
                props.value.to_string()
            };
            let column = self.cursor.column(props.value);
            let skip = (column + 1).saturating_sub(width);
            let visible: String = shown.chars().skip(skip).take(width).collect();

            let mut style = base.fg(theme.fg);
            if disabled {
                style = style.fg(theme.muted).add_modifier(Modifier::DIM);
            }
            buf.set_stringn(left, y, visible, width, style);
        }

        if props.is_focused && !disabled {
            let column = self.cursor.column(props.value);
            let offset = column.min(width - 1) as u16;
            frame.set_cursor_position((left + offset, y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_kit_core::testing::{click, key_ev, row_text, tick, RenderHarness};
    use tui_kit_core::{assert_emitted, assert_not_emitted};

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Change(ValueChange),
    }

    fn focused(value: &str) -> InputFieldProps<'_, TestAction> {
        InputFieldProps {
            is_focused: true,
            ..InputFieldProps::new(value, TestAction::Change)
        }
    }

    fn send(
        input: &mut InputField,
        event: EventKind,
        props: InputFieldProps<'_, TestAction>,
    ) -> Vec<TestAction> {
        input.handle_event(&event, props).into_iter().collect()
    }

    fn edit(value: &str) -> TestAction {
        TestAction::Change(ValueChange::edit(value.to_string()))
    }

    #[test]
    fn test_typing() {
        let mut input = InputField::new();
        let actions = send(&mut input, key_ev("a"), focused(""));
        assert_eq!(actions, vec![edit("a")]);
    }

    #[test]
    fn test_typing_appends_at_cursor() {
        let mut input = InputField::new();
        send(&mut input, key_ev("end"), focused("hello"));
        let actions = send(&mut input, key_ev("!"), focused("hello"));
        assert_eq!(actions, vec![edit("hello!")]);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = InputField::new();
        assert!(send(&mut input, key_ev("backspace"), focused("abc")).is_empty());
        assert_eq!(send(&mut input, key_ev("delete"), focused("abc")), vec![edit("bc")]);

        send(&mut input, key_ev("ctrl+e"), focused("abc"));
        assert_eq!(send(&mut input, key_ev("backspace"), focused("abc")), vec![edit("ab")]);
    }

    #[test]
    fn test_ctrl_u_clears_as_edit() {
        let mut input = InputField::new();
        let actions = send(&mut input, key_ev("ctrl+u"), focused("abc"));
        assert_eq!(actions, vec![edit("")]);
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut input = InputField::new();
        let props = InputFieldProps::new("", TestAction::Change);
        assert!(send(&mut input, key_ev("a"), props).is_empty());
    }

    #[test]
    fn test_number_rejects_letters() {
        let mut input = InputField::new();
        let props = InputFieldProps {
            input_type: InputType::Number,
            ..focused("")
        };
        assert!(send(&mut input, key_ev("x"), props).is_empty());
        assert_eq!(send(&mut input, key_ev("7"), props), vec![edit("7")]);
    }

    #[test]
    fn test_clearable_emits_empty() {
        let mut input = InputField::new();
        let props = InputFieldProps {
            clearable: true,
            ..focused("hello")
        };
        let actions = send(&mut input, key_ev("ctrl+k"), props);
        assert_eq!(actions, vec![TestAction::Change(ValueChange::cleared())]);
        assert_emitted!(
            actions,
            TestAction::Change(ValueChange { value, source: ChangeSource::Clear }) if value.is_empty()
        );
        assert_not_emitted!(actions, TestAction::Change(ValueChange { source: ChangeSource::Edit, .. }));
    }

    #[test]
    fn test_clear_button_click() {
        let mut input = InputField::new();
        let props = InputFieldProps {
            clearable: true,
            ..InputFieldProps::new("hello", TestAction::Change)
        };
        let mut harness = RenderHarness::new(30, 3);
        let output = harness.render_to_string_plain(|frame| input.render(frame, frame.area(), props));
        assert!(output.contains(CLEAR_GLYPH));

        let rect = input.clear_rect.unwrap();
        let actions = send(&mut input, click(rect.x, rect.y), props);
        assert_eq!(actions, vec![TestAction::Change(ValueChange::cleared())]);
    }

    #[test]
    fn test_clear_hidden_when_empty_or_loading() {
        let mut input = InputField::new();
        let empty = InputFieldProps {
            clearable: true,
            ..focused("")
        };
        assert!(!empty.shows_clear());
        assert!(send(&mut input, key_ev("ctrl+k"), empty).is_empty());

        let loading = InputFieldProps {
            clearable: true,
            loading: true,
            ..focused("hello")
        };
        assert!(!loading.shows_clear());
        assert!(send(&mut input, key_ev("ctrl+k"), loading).is_empty());
    }

    #[test]
    fn test_disabled_blocks_edits() {
        let mut input = InputField::new();
        let props = InputFieldProps {
            disabled: true,
            ..focused("hello")
        };
        assert!(props.is_disabled());
        assert!(send(&mut input, key_ev("a"), props).is_empty());
        assert!(send(&mut input, key_ev("backspace"), props).is_empty());
    }

    #[test]
    fn test_disabled_field_still_clears() {
        let mut input = InputField::new();
        let props = InputFieldProps {
            disabled: true,
            clearable: true,
            ..InputFieldProps::new("hello", TestAction::Change)
        };
        let mut harness = RenderHarness::new(30, 3);
        let output = harness.render_to_string_plain(|frame| input.render(frame, frame.area(), props));
        assert!(output.contains(CLEAR_GLYPH));

        let rect = input.clear_rect.unwrap();
        let actions = send(&mut input, click(rect.x, rect.y), props);
        assert_eq!(actions, vec![TestAction::Change(ValueChange::cleared())]);
    }

    #[test]
    fn test_loading_disables_and_spins() {
        let mut input = InputField::new();
        let props = InputFieldProps {
            loading: true,
            clearable: true,
            ..focused("hello")
        };
        assert!(props.is_disabled());
        assert!(send(&mut input, key_ev("a"), props).is_empty());

        let mut harness = RenderHarness::new(30, 3);
        let output = harness.render_to_string_plain(|frame| input.render(frame, frame.area(), props));
        assert!(output.contains(SPINNER_FRAMES[0]));
        assert!(!output.contains(CLEAR_GLYPH));

        send(&mut input, tick(), props);
        let output = harness.render_to_string_plain(|frame| input.render(frame, frame.area(), props));
        assert!(output.contains(SPINNER_FRAMES[1]));
    }

    #[test]
    fn test_password_toggle_masks_without_emitting() {
        let mut input = InputField::new();
        let props = InputFieldProps {
            input_type: InputType::Password,
            password_toggle: true,
            ..focused("secret")
        };
        let mut harness = RenderHarness::new(30, 3);

        let output = harness.render_to_string_plain(|frame| input.render(frame, frame.area(), props));
        assert!(output.contains("••••••"));
        assert!(output.contains(SHOW_LABEL));
        assert!(!output.contains("secret"));
        assert!(input.semantics(&props).masked);

        let actions = send(&mut input, key_ev("ctrl+r"), props);
        assert!(actions.is_empty());
        assert!(input.password_visible());

        let output = harness.render_to_string_plain(|frame| input.render(frame, frame.area(), props));
        assert!(output.contains("secret"));
        assert!(output.contains(HIDE_LABEL));
        assert!(!input.semantics(&props).masked);
        assert_eq!(props.value, "secret");
    }

    #[test]
    fn test_password_toggle_click() {
        let mut input = InputField::new();
        let props = InputFieldProps {
            input_type: InputType::Password,
            password_toggle: true,
            ..InputFieldProps::new("pw", TestAction::Change)
        };
        let mut harness = RenderHarness::new(30, 3);
        harness.render(|frame| input.render(frame, frame.area(), props));

        let rect = input.toggle_rect.unwrap();
        assert!(send(&mut input, click(rect.x + 1, rect.y), props).is_empty());
        assert!(input.password_visible());
    }

    #[test]
    fn test_password_without_toggle_stays_masked() {
        let mut input = InputField::new();
        let props = InputFieldProps {
            input_type: InputType::Password,
            ..focused("pw")
        };
        send(&mut input, key_ev("ctrl+r"), props);
        assert!(!input.password_visible());
        assert!(input.semantics(&props).masked);
    }

    #[test]
    fn test_invalid_shows_error_not_helper() {
        let mut input = InputField::new();
        let props = InputFieldProps {
            invalid: true,
            helper_text: Some("We never share it"),
            error_message: Some("Email is required"),
            ..InputFieldProps::new("", TestAction::Change)
        };
        let mut harness = RenderHarness::new(30, 4);
        let output = harness.render_to_string_plain(|frame| input.render(frame, frame.area(), props));
        assert!(output.contains("Email is required"));
        assert!(!output.contains("We never share it"));

        let semantics = input.semantics(&props);
        assert!(semantics.invalid);
        assert_eq!(semantics.description, Some("Email is required"));
    }

    #[test]
    fn test_helper_shown_when_valid() {
        let props = InputFieldProps {
            helper_text: Some("We never share it"),
            error_message: Some("Email is required"),
            ..InputFieldProps::new("", TestAction::Change)
        };
        assert_eq!(props.aux_text(), Some("We never share it"));

        let no_error = InputFieldProps {
            invalid: true,
            error_message: None,
            ..props
        };
        assert_eq!(no_error.aux_text(), Some("We never share it"));
        assert!(InputField::new().semantics(&no_error).invalid);
    }

    #[test]
    fn test_invalid_colors_helper_text() {
        let mut input = InputField::new();
        let valid = InputFieldProps {
            helper_text: Some("We never share it"),
            ..InputFieldProps::new("", TestAction::Change)
        };
        let invalid = InputFieldProps {
            invalid: true,
            ..valid
        };

        let mut harness = RenderHarness::new(30, 4);
        let buf = harness.render(|frame| input.render(frame, frame.area(), valid));
        assert_eq!(row_text(buf, 3), "We never share it");
        assert_eq!(buf[(0, 3)].fg, valid.theme.muted);

        let buf = harness.render(|frame| input.render(frame, frame.area(), invalid));
        assert_eq!(row_text(buf, 3), "We never share it");
        assert_eq!(buf[(0, 3)].fg, invalid.theme.error);
    }

    #[test]
    fn test_label_and_placeholder_render() {
        let mut input = InputField::new();
        let props = InputFieldProps {
            label: Some("Full name"),
            placeholder: "Jane Doe",
            ..InputFieldProps::new("", TestAction::Change)
        };
        let mut harness = RenderHarness::new(30, 4);
        let buf = harness.render(|frame| input.render(frame, frame.area(), props));
        assert_eq!(row_text(buf, 0), "Full name");
        assert!(row_text(buf, 2).contains("Jane Doe"));

        let semantics = input.semantics(&props);
        assert_eq!(semantics.label, Some("Full name"));
        assert_eq!(semantics.description, None);
    }

    #[test]
    fn test_height() {
        let base = InputFieldProps::new("", TestAction::Change);
        assert_eq!(InputField::height(&base), 3);

        let labelled = InputFieldProps {
            label: Some("Name"),
            helper_text: Some("help"),
            ..base
        };
        assert_eq!(InputField::height(&labelled), 5);

        let filled = InputFieldProps {
            variant: Variant::Filled,
            ..base
        };
        assert_eq!(InputField::height(&filled), 1);

        let large_ghost = InputFieldProps {
            variant: Variant::Ghost,
            size: Size::Large,
            ..base
        };
        assert_eq!(InputField::height(&large_ghost), 3);
    }

    #[test]
    fn test_padding_by_size() {
        let mut input = InputField::new();
        let mut harness = RenderHarness::new(20, 1);
        for (size, pad) in [(Size::Small, 1), (Size::Medium, 2), (Size::Large, 3)] {
            let props = InputFieldProps {
                variant: Variant::Ghost,
                size,
                ..InputFieldProps::new("x", TestAction::Change)
            };
            let buf = harness.render(|frame| input.render(frame, frame.area(), props));
            assert_eq!(row_text(buf, 0), format!("{}x", " ".repeat(pad)));
        }
    }
}
