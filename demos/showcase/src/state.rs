//! Everything the demo page knows

use tui_kit::BindingContext;
use tui_kit_components::{Record, Theme};

/// Which widget receives keys; doubles as the keybinding context
#[derive(BindingContext, Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Focus {
    #[default]
    Name,
    Password,
    Notes,
    Required,
    Users,
    /// The story browser screen
    Stories,
}

impl Focus {
    /// Focus ring of the demo page, in Tab order
    pub const PAGE: [Focus; 5] = [
        Focus::Name,
        Focus::Password,
        Focus::Notes,
        Focus::Required,
        Focus::Users,
    ];

    fn ring_index(self) -> usize {
        Self::PAGE.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::PAGE[(self.ring_index() + 1) % Self::PAGE.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::PAGE.len();
        Self::PAGE[(self.ring_index() + len - 1) % len]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Page,
    Stories,
}

pub struct AppState {
    pub name: String,
    pub password: String,
    /// Value of the field shown in its loading state
    pub notes: String,
    pub required: String,
    pub users: Vec<Record>,
    /// Last selection reported by the table
    pub selected: Vec<Record>,
    pub dark: bool,
    pub light_theme: Theme,
    pub dark_theme: Theme,
    pub focus: Focus,
    pub screen: Screen,
    /// Index into `stories()`
    pub story: usize,
}

impl AppState {
    pub fn new(users: Vec<Record>, light_theme: Theme, dark_theme: Theme) -> Self {
        Self {
            name: String::new(),
            password: String::new(),
            notes: String::new(),
            required: String::new(),
            users,
            selected: Vec::new(),
            dark: false,
            light_theme,
            dark_theme,
            focus: Focus::default(),
            screen: Screen::default(),
            story: 0,
        }
    }

    pub fn theme(&self) -> Theme {
        if self.dark {
            self.dark_theme
        } else {
            self.light_theme
        }
    }

    /// Keybinding context for the current screen and focus
    pub fn context(&self) -> Focus {
        match self.screen {
            Screen::Page => self.focus,
            Screen::Stories => Focus::Stories,
        }
    }

    pub fn is_focused(&self, focus: Focus) -> bool {
        self.screen == Screen::Page && self.focus == focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_ring_wraps() {
        assert_eq!(Focus::Name.next(), Focus::Password);
        assert_eq!(Focus::Users.next(), Focus::Name);
        assert_eq!(Focus::Name.prev(), Focus::Users);
        assert_eq!(Focus::Stories.next(), Focus::Password);
    }

    #[test]
    fn test_context_follows_screen() {
        let mut state = AppState::new(Vec::new(), Theme::light(), Theme::dark());
        state.focus = Focus::Users;
        assert_eq!(state.context(), Focus::Users);
        assert!(state.is_focused(Focus::Users));

        state.screen = Screen::Stories;
        assert_eq!(state.context(), Focus::Stories);
        assert!(!state.is_focused(Focus::Users));
    }

    #[test]
    fn test_theme_follows_dark_flag() {
        let mut state = AppState::new(Vec::new(), Theme::light(), Theme::dark());
        assert_eq!(state.theme().name, "light");
        state.dark = true;
        assert_eq!(state.theme().name, "dark");
    }
}
