//! Action trait for notifications flowing out of components

use std::fmt::Debug;

/// Marker trait for actions a host application dispatches to its store
///
/// Widgets never mutate host state directly. Every notification (a value
/// change, a row selection) is turned into an action through a callback the
/// host passes in props, and the host decides what to do with it.
///
/// Use `#[derive(Action)]` from `tui-kit-macros` to auto-implement this trait.
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;
}
