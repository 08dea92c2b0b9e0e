//! Actions for the demo page

use tui_kit::Action;
use tui_kit_components::{Record, ValueChange};

use crate::state::Focus;

#[derive(Action, Clone, Debug)]
pub enum AppAction {
    NameChange(ValueChange),
    PasswordChange(ValueChange),
    NotesChange(ValueChange),
    RequiredChange(ValueChange),
    #[action(rename = "RowsSelected")]
    UsersSelect(Vec<Record>),
    FocusNext,
    FocusPrev,
    FocusSet(Focus),
    DarkModeToggle,
    StoriesToggle,
    StoryNext,
    StoryPrev,
    Quit,
}

impl AppAction {
    /// Map a keybinding command name to its action
    pub fn from_command(command: &str) -> Option<Self> {
        let action = match command {
            "quit" => AppAction::Quit,
            "focus_next" => AppAction::FocusNext,
            "focus_prev" => AppAction::FocusPrev,
            "toggle_dark" => AppAction::DarkModeToggle,
            "stories" => AppAction::StoriesToggle,
            "next_story" => AppAction::StoryNext,
            "prev_story" => AppAction::StoryPrev,
            _ => return None,
        };
        Some(action)
    }
}
