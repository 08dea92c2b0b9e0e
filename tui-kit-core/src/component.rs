//! Component trait for presentational widgets

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A presentational widget that renders from props and emits actions
///
/// Components follow these rules:
/// 1. Props carry everything the host owns (values, rows, flags, callbacks)
/// 2. `handle_event` returns actions, never mutates host state
/// 3. `render` is a pure function of props plus the widget's own UI state
///
/// Widget-local state (sort order, row selection, cursor, password
/// visibility) lives in `&mut self` and is dropped with the widget.
///
/// # Example
///
/// ```ignore
/// use tui_kit::{Component, EventKind, Frame, Rect};
///
/// struct Toggle;
///
/// struct ToggleProps {
///     on: bool,
///     is_focused: bool,
/// }
///
/// impl Component<AppAction> for Toggle {
///     type Props<'a> = ToggleProps;
///
///     fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> impl IntoIterator<Item = AppAction> {
///         if !props.is_focused {
///             return None;
///         }
///         match event {
///             EventKind::Key(key) if key.code == KeyCode::Char(' ') => Some(AppAction::DarkModeToggle),
///             _ => None,
///         }
///     }
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
///         let text = if props.on { "Dark" } else { "Light" };
///         frame.render_widget(Paragraph::new(text), area);
///     }
/// }
/// ```
pub trait Component<A> {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Handle an event and return actions to dispatch
    ///
    /// Returns any type implementing `IntoIterator<Item = A>`:
    /// - `None` - no actions (most common)
    /// - `Some(action)` - single action
    /// - `vec![...]` - multiple actions
    ///
    /// Default implementation returns no actions (render-only components).
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
