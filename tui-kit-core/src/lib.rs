//! Core traits and types for tui-kit
//!
//! This crate provides the foundational abstractions the tui-kit widgets are
//! built on, following a props-in / actions-out model.
//!
//! # Core Concepts
//!
//! - **Component**: Presentational widget that renders from props
//! - **Action**: Notification a widget emits through a props callback
//! - **Store**: Host-side state container with reducer pattern
//! - **Keybindings**: Context-aware key mapping for host commands
//!
//! # Basic Example
//!
//! ```ignore
//! use tui_kit::prelude::*;
//! use tui_kit_components::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! enum AppAction {
//!     NameChange(ValueChange),
//!     DarkModeToggle,
//! }
//!
//! // The host owns the text; the widget only reports edits.
//! let props = InputFieldProps {
//!     label: Some("Your name"),
//!     clearable: true,
//!     ..InputFieldProps::new(&state.name, AppAction::NameChange)
//! };
//! for action in input.handle_event(&event, props) {
//!     store.dispatch(action);
//! }
//! ```

pub mod action;
pub mod component;
pub mod event;
pub mod keybindings;
pub mod poller;
pub mod store;
pub mod testing;

pub use action::Action;
pub use component::Component;

pub use event::{rect_contains, EventKind};
pub use poller::{process_raw_event, spawn_event_poller, PollerConfig, RawEvent};

pub use keybindings::{
    format_key_for_display, parse_key_string, BindingContext, KeybindingError, Keybindings,
};

pub use store::{LoggingMiddleware, Middleware, Reducer, Store, StoreWithMiddleware};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

pub use testing::{
    buffer_to_string_plain, char_key, click, ctrl_key, key, key_ev, row_text, tick,
    RenderHarness,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::component::Component;
    pub use crate::event::{rect_contains, EventKind};
    pub use crate::keybindings::{
        format_key_for_display, parse_key_string, BindingContext, Keybindings,
    };
    pub use crate::poller::{process_raw_event, spawn_event_poller, PollerConfig, RawEvent};
    pub use crate::store::{LoggingMiddleware, Middleware, Reducer, Store, StoreWithMiddleware};

    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
