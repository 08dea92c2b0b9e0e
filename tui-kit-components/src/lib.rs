//! Pre-built widgets for tui-kit
//!
//! Both widgets implement the `Component<A>` trait: the host owns every piece
//! of persistent state, passes it in through props, and receives changes back
//! as actions built by the `fn` callbacks in those props.
//!
//! # Components
//!
//! - [`InputField`] - Single-line text field with label, helper/error text,
//!   clear button, password toggle and loading spinner
//! - [`DataTable`] - Bordered table with single-column sorting and checkbox
//!   row selection
//!
//! # Example
//!
//! ```ignore
//! use tui_kit_components::prelude::*;
//!
//! let columns = Columns::new(vec![
//!     Column::field("name", "Name").sortable(),
//!     Column::field("email", "Email"),
//! ])?;
//!
//! table.render(frame, area, DataTableProps {
//!     selectable: true,
//!     on_row_select: Some(Action::UsersSelect),
//!     is_focused: state.focus == Focus::Table,
//!     theme: Theme::for_mode(state.dark),
//!     ..DataTableProps::new(&state.users, &columns)
//! });
//! ```

pub mod data_table;
mod error;
pub mod input_field;
pub mod stories;
mod theme;

pub use data_table::{
    AriaSort, CellValue, CheckState, Column, Columns, DataTable, DataTableProps, Record,
    Selection, SortDirection, SortKey, SortState, DEFAULT_EMPTY_MESSAGE,
};
pub use error::{ConfigError, ThemeError};
pub use input_field::{
    ChangeSource, FieldSemantics, InputField, InputFieldProps, InputType, Size, ValueChange,
    Variant,
};
pub use stories::{render_story, sample_users, stories, user_columns, Story, StoryComponent};
pub use theme::{Theme, ThemeOverrides};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        CellValue, ChangeSource, Column, Columns, DataTable, DataTableProps, InputField,
        InputFieldProps, InputType, Record, Size, Theme, ValueChange, Variant,
    };
}
