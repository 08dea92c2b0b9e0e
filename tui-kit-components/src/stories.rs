//! Named presets for browsing the widgets in isolation
//!
//! Each [`Story`] renders one widget configuration with fresh widget state.
//! The showcase's story browser walks [`stories()`] in order.

use std::fmt;

use ratatui::{
    layout::{Constraint, Rect},
    Frame,
};
use tracing::warn;
use tui_kit_core::Component;

use crate::data_table::{Column, Columns, DataTable, DataTableProps, Record};
use crate::error::ConfigError;
use crate::input_field::{InputField, InputFieldProps, InputType, Size, ValueChange, Variant};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryComponent {
    InputField,
    DataTable,
}

impl fmt::Display for StoryComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoryComponent::InputField => f.write_str("InputField"),
            StoryComponent::DataTable => f.write_str("DataTable"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Story {
    pub component: StoryComponent,
    pub name: &'static str,
}

impl fmt::Display for Story {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.component, self.name)
    }
}

const fn story(component: StoryComponent, name: &'static str) -> Story {
    Story { component, name }
}

static STORIES: [Story; 10] = [
    story(StoryComponent::InputField, "Basic"),
    story(StoryComponent::InputField, "Invalid"),
    story(StoryComponent::InputField, "Loading"),
    story(StoryComponent::InputField, "PasswordWithToggle"),
    story(StoryComponent::InputField, "Variants"),
    story(StoryComponent::InputField, "Sizes"),
    story(StoryComponent::DataTable, "Basic"),
    story(StoryComponent::DataTable, "Selectable"),
    story(StoryComponent::DataTable, "Loading"),
    story(StoryComponent::DataTable, "Empty"),
];

pub fn stories() -> &'static [Story] {
    &STORIES
}

/// The six users shown by the table stories and the showcase page
pub fn sample_users() -> Vec<Record> {
    let user = |id: u32, name: &str, email: &str, age: u32| {
        let mut record = Record::new();
        record.insert("id".into(), id.into());
        record.insert("name".into(), name.into());
        record.insert("email".into(), email.into());
        record.insert("age".into(), age.into());
        record
    };
    vec![
        user(1, "Aarya", "aarya@example.com", 22),
        user(2, "Bhavesh", "bhavesh@example.com", 19),
        user(3, "Chirag", "chirag@example.com", 25),
        user(4, "Mayank", "Mayank@example.com", 27),
        user(5, "Sundar", "Sundar@example.com", 21),
        user(6, "Chetan", "Chetan@example.com", 23),
    ]
}

/// Name (sortable), Email, Age (sortable)
pub fn user_columns() -> Result<Columns<Record>, ConfigError> {
    Columns::new(vec![
        Column::field("name", "Name").sortable(),
        Column::field("email", "Email").width(Constraint::Fill(2)),
        Column::field("age", "Age").sortable(),
    ])
}

fn ignore_change(_: ValueChange) {}

const FIELD_WIDTH: u16 = 40;
const FIELD_GAP: u16 = 1;

fn base_field(theme: Theme) -> InputFieldProps<'static, ()> {
    InputFieldProps {
        label: Some("Label"),
        placeholder: "Enter text",
        helper_text: Some("Helper goes here"),
        theme,
        ..InputFieldProps::new("", ignore_change)
    }
}

/// Stack fields top to bottom, each at its own height
fn render_fields(frame: &mut Frame, area: Rect, fields: &[InputFieldProps<'_, ()>]) {
    let mut y = area.y;
    let bottom = area.y + area.height;
    for props in fields {
        let height = InputField::height(props).min(bottom.saturating_sub(y));
        if height == 0 {
            break;
        }
        let rect = Rect {
            y,
            height,
            width: area.width.min(FIELD_WIDTH),
            ..area
        };
        InputField::new().render(frame, rect, *props);
        y += height + FIELD_GAP;
    }
}

fn render_input_story(name: &str, frame: &mut Frame, area: Rect, theme: Theme) {
    let base = base_field(theme);
    match name {
        "Invalid" => render_fields(
            frame,
            area,
            &[InputFieldProps {
                invalid: true,
                error_message: Some("This field is required."),
                ..base
            }],
        ),
        "Loading" => render_fields(frame, area, &[InputFieldProps { loading: true, ..base }]),
        "PasswordWithToggle" => render_fields(
            frame,
            area,
            &[InputFieldProps {
                input_type: InputType::Password,
                password_toggle: true,
                label: Some("Password"),
                ..base
            }],
        ),
        "Variants" => render_fields(
            frame,
            area,
            &[
                InputFieldProps {
                    variant: Variant::Outlined,
                    label: Some("Outlined"),
                    ..base
                },
                InputFieldProps {
                    variant: Variant::Filled,
                    label: Some("Filled"),
                    ..base
                },
                InputFieldProps {
                    variant: Variant::Ghost,
                    label: Some("Ghost"),
                    ..base
                },
            ],
        ),
        "Sizes" => render_fields(
            frame,
            area,
            &[
                InputFieldProps {
                    size: Size::Small,
                    label: Some("Small"),
                    ..base
                },
                InputFieldProps {
                    size: Size::Medium,
                    label: Some("Medium"),
                    ..base
                },
                InputFieldProps {
                    size: Size::Large,
                    label: Some("Large"),
                    ..base
                },
            ],
        ),
        _ => render_fields(frame, area, &[base]),
    }
}

fn render_table_story(name: &str, frame: &mut Frame, area: Rect, theme: Theme) {
    let columns = match user_columns() {
        Ok(columns) => columns,
        Err(err) => {
            warn!(%err, "Sample columns rejected");
            return;
        }
    };
    let users = sample_users();
    let data: &[Record] = if name == "Empty" { &[] } else { &users };

    let props: DataTableProps<'_, Record, ()> = DataTableProps {
        selectable: name == "Selectable",
        loading: name == "Loading",
        theme,
        ..DataTableProps::new(data, &columns)
    };
    DataTable::<Record>::new().render(frame, area, props);
}

/// Draw `story` into `area`
pub fn render_story(story: &Story, frame: &mut Frame, area: Rect, theme: Theme) {
    match story.component {
        StoryComponent::InputField => render_input_story(story.name, frame, area, theme),
        StoryComponent::DataTable => render_table_story(story.name, frame, area, theme),
    }
}
