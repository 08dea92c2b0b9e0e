//! The only place demo state changes

use tracing::info;
use tui_kit_components::stories;

use crate::action::AppAction;
use crate::state::{AppState, Screen};

pub fn reducer(state: &mut AppState, action: AppAction) -> bool {
    match action {
        AppAction::NameChange(change) => {
            state.name = change.value;
            true
        }
        AppAction::PasswordChange(change) => {
            state.password = change.value;
            true
        }
        AppAction::NotesChange(change) => {
            state.notes = change.value;
            true
        }
        AppAction::RequiredChange(change) => {
            state.required = change.value;
            true
        }
        AppAction::UsersSelect(rows) => {
            info!(count = rows.len(), "Selected rows");
            state.selected = rows;
            true
        }
        AppAction::FocusNext => {
            state.focus = state.focus.next();
            true
        }
        AppAction::FocusPrev => {
            state.focus = state.focus.prev();
            true
        }
        AppAction::FocusSet(focus) => {
            if state.focus == focus {
                return false;
            }
            state.focus = focus;
            true
        }
        AppAction::DarkModeToggle => {
            state.dark = !state.dark;
            true
        }
        AppAction::StoriesToggle => {
            state.screen = match state.screen {
                Screen::Page => Screen::Stories,
                Screen::Stories => Screen::Page,
            };
            true
        }
        AppAction::StoryNext => {
            state.story = (state.story + 1) % stories().len();
            true
        }
        AppAction::StoryPrev => {
            let len = stories().len();
            state.story = (state.story + len - 1) % len;
            true
        }
        AppAction::Quit => false,
    }
}
