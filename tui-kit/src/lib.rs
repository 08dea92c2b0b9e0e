//! tui-kit: props-in, actions-out widgets for ratatui apps
//!
//! Widgets render from borrowed props and report changes as actions; the host
//! keeps all state in a store and feeds actions through a reducer.
//!
//! # Example
//! ```ignore
//! use tui_kit::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! enum AppAction {
//!     NameChange(ValueChange),
//!     DarkModeToggle,
//! }
//!
//! #[derive(BindingContext, Clone, Copy, PartialEq, Eq, Hash, Debug)]
//! enum Focus {
//!     NameInput,
//!     UserTable,
//! }
//! ```

// Re-export everything from core
pub use tui_kit_core::*;

// Re-export derive macros
pub use tui_kit_macros::{Action, BindingContext};

/// Prelude for convenient imports
pub mod prelude {
    // Traits
    pub use tui_kit_core::{Action, BindingContext, Component};

    // Events
    pub use tui_kit_core::{
        process_raw_event, rect_contains, spawn_event_poller, EventKind, PollerConfig, RawEvent,
    };

    // Keybindings
    pub use tui_kit_core::{format_key_for_display, parse_key_string, Keybindings};

    // Store
    pub use tui_kit_core::{LoggingMiddleware, Middleware, Reducer, Store, StoreWithMiddleware};

    // Derive macros
    pub use tui_kit_macros::{Action, BindingContext};

    // Ratatui re-exports
    pub use tui_kit_core::{Color, Frame, Line, Modifier, Rect, Span, Style, Text};
}
