//! Widget instances, layout and event routing for the demo page

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_kit::{format_key_for_display, rect_contains, Component, EventKind, Keybindings};
use tui_kit_components::{
    render_story, stories, user_columns, Columns, ConfigError, DataTable, DataTableProps,
    InputField, InputFieldProps, InputType, Record, Size, Variant,
};

use crate::action::AppAction;
use crate::state::{AppState, Focus, Screen};

const TITLE: &str = "UI Components Demo";
const FIELD_GAP: u16 = 1;

fn field_props(focus: Focus, state: &AppState) -> Option<InputFieldProps<'_, AppAction>> {
    let theme = state.theme();
    let is_focused = state.is_focused(focus);
    let props = match focus {
        Focus::Name => InputFieldProps {
            label: Some("Your name"),
            placeholder: "Type here...",
            helper_text: Some("We won't sell it to aliens."),
            clearable: true,
            ..InputFieldProps::new(&state.name, AppAction::NameChange)
        },
        Focus::Password => InputFieldProps {
            label: Some("Password"),
            placeholder: "••••••••",
            input_type: InputType::Password,
            helper_text: Some("Use at least 8 characters mixing letters, numbers and symbols."),
            variant: Variant::Filled,
            password_toggle: true,
            ..InputFieldProps::new(&state.password, AppAction::PasswordChange)
        },
        Focus::Notes => InputFieldProps {
            label: Some("Loading state"),
            placeholder: "Processing...",
            helper_text: Some("We're doing important stuff."),
            loading: true,
            variant: Variant::Ghost,
            size: Size::Small,
            ..InputFieldProps::new(&state.notes, AppAction::NotesChange)
        },
        Focus::Required => InputFieldProps {
            label: Some("Invalid example"),
            placeholder: "Oops",
            invalid: state.required.trim().is_empty(),
            error_message: Some("This field is required."),
            size: Size::Large,
            ..InputFieldProps::new(&state.required, AppAction::RequiredChange)
        },
        Focus::Users | Focus::Stories => return None,
    };
    Some(InputFieldProps {
        is_focused,
        theme,
        ..props
    })
}

fn table_props<'a>(
    columns: &'a Columns<Record>,
    state: &'a AppState,
) -> DataTableProps<'a, Record, AppAction> {
    DataTableProps {
        selectable: true,
        on_row_select: Some(AppAction::UsersSelect),
        is_focused: state.is_focused(Focus::Users),
        theme: state.theme(),
        ..DataTableProps::new(&state.users, columns)
    }
}

/// Areas captured at the last render, for click-to-focus
#[derive(Debug, Default)]
struct Areas {
    dark_button: Rect,
    widgets: Vec<(Focus, Rect)>,
}

pub struct Ui {
    name: InputField,
    password: InputField,
    notes: InputField,
    required: InputField,
    table: DataTable<Record>,
    columns: Columns<Record>,
    areas: Areas,
}

impl Ui {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            name: InputField::new(),
            password: InputField::new(),
            notes: InputField::new(),
            required: InputField::new(),
            table: DataTable::new(),
            columns: user_columns()?,
            areas: Areas::default(),
        })
    }

    fn field_mut(&mut self, focus: Focus) -> Option<&mut InputField> {
        match focus {
            Focus::Name => Some(&mut self.name),
            Focus::Password => Some(&mut self.password),
            Focus::Notes => Some(&mut self.notes),
            Focus::Required => Some(&mut self.required),
            Focus::Users | Focus::Stories => None,
        }
    }

    /// Route a terminal event to the page widgets
    ///
    /// Widgets ignore keys unless focused, so every widget sees every event.
    pub fn handle_event(&mut self, event: &EventKind, state: &AppState) -> Vec<AppAction> {
        let mut actions = Vec::new();
        if state.screen != Screen::Page {
            return actions;
        }

        if let Some((x, y)) = event.left_click() {
            if rect_contains(self.areas.dark_button, x, y) {
                actions.push(AppAction::DarkModeToggle);
                return actions;
            }
            let hit = self
                .areas
                .widgets
                .iter()
                .find(|(_, rect)| rect_contains(*rect, x, y));
            if let Some(&(focus, _)) = hit {
                if focus != state.focus {
                    actions.push(AppAction::FocusSet(focus));
                }
            }
        }

        for focus in Focus::PAGE {
            if focus == Focus::Users {
                let props = table_props(&self.columns, state);
                actions.extend(self.table.handle_event(event, props));
            } else if let (Some(props), Some(field)) =
                (field_props(focus, state), self.field_mut(focus))
            {
                actions.extend(field.handle_event(event, props));
            }
        }
        actions
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState, keybindings: &Keybindings<Focus>) {
        let theme = state.theme();
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.surface).fg(theme.fg)),
            area,
        );

        let [header, body, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_header(frame, header, state);
        match state.screen {
            Screen::Page => self.render_page(frame, body, state),
            Screen::Stories => render_stories(frame, body, state),
        }
        render_status(frame, status, state, keybindings);
    }

    fn render_header(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let theme = state.theme();
        frame.render_widget(
            Paragraph::new(TITLE)
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)),
            area,
        );

        // Names the mode it switches to
        let label = if state.dark { " Light " } else { " Dark " };
        let width = label.len() as u16;
        let button = Rect {
            x: area.x + area.width.saturating_sub(width),
            width: width.min(area.width),
            ..area
        };
        frame.render_widget(
            Paragraph::new(label).style(Style::default().bg(theme.header_bg).fg(theme.accent)),
            button,
        );
        self.areas.dark_button = button;
    }

    fn render_page(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let theme = state.theme();
        let [left, right] = Layout::horizontal([Constraint::Percentage(45), Constraint::Fill(1)])
            .spacing(2)
            .areas(area);
        self.areas.widgets.clear();

        let card = |title: &'static str| {
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(Line::from(title).centered())
        };

        // Input fields, stacked
        let fields_card = card(" InputField ");
        let inner = fields_card.inner(left);
        frame.render_widget(fields_card, left);

        let mut y = inner.y;
        let bottom = inner.y + inner.height;
        for focus in [Focus::Name, Focus::Password, Focus::Notes, Focus::Required] {
            let Some(props) = field_props(focus, state) else {
                continue;
            };
            let height = InputField::height(&props).min(bottom.saturating_sub(y));
            if height == 0 {
                break;
            }
            let rect = Rect { y, height, ..inner };
            if let Some(field) = self.field_mut(focus) {
                field.render(frame, rect, props);
            }
            self.areas.widgets.push((focus, rect));
            y += height + FIELD_GAP;
        }

        // User table
        let table_card = card(" DataTable ");
        let inner = table_card.inner(right);
        frame.render_widget(table_card, right);

        let rows = state.users.len() as u16;
        let rect = Rect {
            height: (rows + 3).min(inner.height),
            ..inner
        };
        let props = table_props(&self.columns, state);
        self.table.render(frame, rect, props);
        self.areas.widgets.push((Focus::Users, rect));
    }
}

fn render_stories(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = state.theme();
    let all = stories();
    let Some(story) = all.get(state.story) else {
        return;
    };

    let [title, canvas] =
        Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(area);
    let heading = Line::from(vec![
        Span::styled("◀ ", Style::default().fg(theme.muted)),
        Span::styled(story.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  ({}/{}) ▶", state.story + 1, all.len()),
            Style::default().fg(theme.muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(heading).alignment(Alignment::Center), title);
    render_story(story, frame, canvas, theme);
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState, keybindings: &Keybindings<Focus>) {
    let theme = state.theme();
    let context = state.context();
    let hint = |command: &str, label: &str| {
        keybindings
            .get_first_keybinding(command, context)
            .map(|key| format!("{} {label}", format_key_for_display(&key)))
    };

    let mut parts = Vec::new();
    match state.screen {
        Screen::Page => {
            parts.push(format!("{} selected", state.selected.len()));
            parts.extend(hint("focus_next", "next"));
            parts.extend(hint("toggle_dark", "theme"));
            parts.extend(hint("stories", "stories"));
        }
        Screen::Stories => {
            parts.extend(hint("prev_story", "prev"));
            parts.extend(hint("next_story", "next"));
            parts.extend(hint("stories", "back"));
        }
    }
    parts.extend(hint("quit", "quit"));

    frame.render_widget(
        Paragraph::new(parts.join(" · ")).style(Style::default().fg(theme.muted)),
        area,
    );
}
