//! Context-aware keybindings for host applications
//!
//! Widgets handle their own editing and navigation keys. Keybindings cover
//! the host's commands (focus cycling, theme switching, quitting) and can be
//! overridden from a JSON file:
//!
//! ```json
//! {
//!   "global": { "quit": ["q", "ctrl+c"] },
//!   "table": { "focus_next": ["tab"] }
//! }
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::hash::Hash;
use std::path::Path;
use thiserror::Error;

/// Trait for user-defined keybinding contexts
///
/// Implement this trait for your own context enum, or use
/// `#[derive(BindingContext)]` from `tui-kit-macros`.
pub trait BindingContext: Clone + Copy + Eq + Hash {
    /// Get the context name as a string (for config file lookup)
    fn name(&self) -> &'static str;

    /// Parse a context from its name
    fn from_name(name: &str) -> Option<Self>;

    /// Get all possible context values
    fn all() -> &'static [Self];
}

/// Errors raised while loading keybinding configuration
#[derive(Debug, Error)]
pub enum KeybindingError {
    #[error("failed to read keybindings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid keybindings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("command `{command}` has unparseable key `{key}`")]
    InvalidKey { command: String, key: String },
}

/// Keybindings configuration with context support
#[derive(Debug, Clone)]
pub struct Keybindings<C: BindingContext> {
    /// Global keybindings - checked as fallback for all contexts
    global: HashMap<String, Vec<String>>,
    /// Context-specific keybindings
    contexts: HashMap<C, HashMap<String, Vec<String>>>,
}

impl<C: BindingContext> Default for Keybindings<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: BindingContext> Serialize for Keybindings<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(1 + self.contexts.len()))?;
        map.serialize_entry("global", &self.global)?;
        for (context, bindings) in &self.contexts {
            map.serialize_entry(context.name(), bindings)?;
        }
        map.end()
    }
}

impl<'de, C: BindingContext> Deserialize<'de> for Keybindings<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: HashMap<String, HashMap<String, Vec<String>>> =
            HashMap::deserialize(deserializer)?;

        let mut keybindings = Keybindings::new();
        for (context_name, bindings) in raw {
            if context_name == "global" {
                keybindings.global = bindings;
            } else if let Some(context) = C::from_name(&context_name) {
                keybindings.contexts.insert(context, bindings);
            } else {
                tracing::warn!(context = %context_name, "Ignoring unknown keybinding context");
            }
        }

        Ok(keybindings)
    }
}

impl<C: BindingContext> Keybindings<C> {
    /// Create a new empty keybindings configuration
    pub fn new() -> Self {
        Self {
            global: HashMap::new(),
            contexts: HashMap::new(),
        }
    }

    /// Parse and validate keybindings from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, KeybindingError> {
        let bindings: Self = serde_json::from_str(json)?;
        bindings.validate()?;
        Ok(bindings)
    }

    /// Load keybindings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, KeybindingError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject bindings whose key strings cannot be parsed
    pub fn validate(&self) -> Result<(), KeybindingError> {
        let all = std::iter::once(&self.global).chain(self.contexts.values());
        for bindings in all {
            for (command, keys) in bindings {
                if let Some(bad) = keys.iter().find(|k| parse_key_string(k).is_none()) {
                    return Err(KeybindingError::InvalidKey {
                        command: command.clone(),
                        key: bad.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Add a global keybinding
    pub fn add_global(&mut self, command: impl Into<String>, keys: Vec<String>) {
        self.global.insert(command.into(), keys);
    }

    /// Add a context-specific keybinding
    pub fn add(&mut self, context: C, command: impl Into<String>, keys: Vec<String>) {
        self.contexts
            .entry(context)
            .or_default()
            .insert(command.into(), keys);
    }

    /// Get global bindings
    pub fn global_bindings(&self) -> &HashMap<String, Vec<String>> {
        &self.global
    }

    /// Get command name for a key event in the given context
    ///
    /// Context-specific bindings win over global ones.
    pub fn get_command(&self, key: KeyEvent, context: C) -> Option<String> {
        self.contexts
            .get(&context)
            .and_then(|bindings| match_key_in_bindings(key, bindings))
            .or_else(|| match_key_in_bindings(key, &self.global))
    }

    /// Get the first keybinding string for a command in the given context
    pub fn get_first_keybinding(&self, command: &str, context: C) -> Option<String> {
        self.contexts
            .get(&context)
            .and_then(|bindings| bindings.get(command))
            .or_else(|| self.global.get(command))
            .and_then(|keys| keys.first().cloned())
    }

    /// Merge user config onto defaults - user config overrides defaults
    pub fn merge(mut defaults: Self, user: Self) -> Self {
        defaults.global.extend(user.global);
        for (context, bindings) in user.contexts {
            defaults.contexts.entry(context).or_default().extend(bindings);
        }
        defaults
    }
}

fn match_key_in_bindings(key: KeyEvent, bindings: &HashMap<String, Vec<String>>) -> Option<String> {
    bindings
        .iter()
        .find(|(_, keys)| {
            keys.iter()
                .filter_map(|k| parse_key_string(k))
                .any(|parsed| key_matches(&parsed, &key))
        })
        .map(|(command, _)| command.clone())
}

/// Compare code and modifiers, ignoring kind/state; chars are case-insensitive
fn key_matches(parsed: &KeyEvent, key: &KeyEvent) -> bool {
    let codes_match = match (parsed.code, key.code) {
        (KeyCode::Char(a), KeyCode::Char(b)) => a.to_lowercase().eq(b.to_lowercase()),
        (a, b) => a == b,
    };
    codes_match && parsed.modifiers == key.modifiers
}

/// Parse a key string like "q", "esc", "ctrl+p", "shift+tab" into a KeyEvent
pub fn parse_key_string(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim().to_lowercase();
    if key_str.is_empty() {
        return None;
    }

    let press = |code, modifiers| KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    };

    if key_str == "shift+tab" || key_str == "backtab" {
        return Some(press(KeyCode::BackTab, KeyModifiers::SHIFT));
    }

    // A lone "+" is a key, not a separator
    let (modifier_parts, key_part) = match key_str.rsplit_once('+') {
        Some((mods, "")) => (mods.trim_end_matches('+'), "+"),
        Some((mods, key)) => (mods, key),
        None => ("", key_str.as_str()),
    };

    let mut modifiers = KeyModifiers::empty();
    for part in modifier_parts.split('+').filter(|p| !p.is_empty()) {
        match part.trim() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => return None,
        }
    }

    let code = match key_part.trim() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => {
            let n: u8 = f[1..].parse().ok()?;
            if !(1..=12).contains(&n) {
                return None;
            }
            KeyCode::F(n)
        }
        c if c.chars().count() == 1 => KeyCode::Char(c.chars().next()?),
        _ => return None,
    };

    Some(press(code, modifiers))
}

/// Format a key string for display (e.g., "ctrl+p" -> "^P", "q" -> "Q", "tab" -> "Tab")
pub fn format_key_for_display(key_str: &str) -> String {
    let key_str = key_str.trim().to_lowercase();
    if key_str == "shift+tab" || key_str == "backtab" {
        return "Shift+Tab".to_string();
    }

    let (modifier_parts, key_part) = key_str.rsplit_once('+').unwrap_or(("", &key_str));
    let prefix: String = modifier_parts
        .split('+')
        .map(|part| match part.trim() {
            "ctrl" | "control" => "^",
            "shift" => "Shift+",
            "alt" => "Alt+",
            _ => "",
        })
        .collect();

    let key_display = match key_part {
        "esc" | "escape" => "Esc".to_string(),
        "enter" | "return" => "Enter".to_string(),
        "tab" => "Tab".to_string(),
        "backspace" => "Backspace".to_string(),
        "up" => "Up".to_string(),
        "down" => "Down".to_string(),
        "left" => "Left".to_string(),
        "right" => "Right".to_string(),
        "pageup" => "PgUp".to_string(),
        "pagedown" => "PgDn".to_string(),
        "delete" => "Del".to_string(),
        "space" => "Space".to_string(),
        f if f.len() > 1 && f.starts_with('f') => f.to_uppercase(),
        other => other.to_uppercase(),
    };

    format!("{prefix}{key_display}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestContext {
        Form,
        Table,
    }

    impl BindingContext for TestContext {
        fn name(&self) -> &'static str {
            match self {
                TestContext::Form => "form",
                TestContext::Table => "table",
            }
        }

        fn from_name(name: &str) -> Option<Self> {
            match name {
                "form" => Some(TestContext::Form),
                "table" => Some(TestContext::Table),
                _ => None,
            }
        }

        fn all() -> &'static [Self] {
            &[TestContext::Form, TestContext::Table]
        }
    }

    #[test]
    fn test_parse_simple_key() {
        let result = parse_key_string("q").unwrap();
        assert_eq!(result.code, KeyCode::Char('q'));
        assert_eq!(result.modifiers, KeyModifiers::empty());
    }

    #[test]
    fn test_parse_ctrl_key() {
        let result = parse_key_string("ctrl+k").unwrap();
        assert_eq!(result.code, KeyCode::Char('k'));
        assert!(result.modifiers.contains(KeyModifiers::CONTROL));
    }

    #[test]
    fn test_parse_shift_tab() {
        let result = parse_key_string("shift+tab").unwrap();
        assert_eq!(result.code, KeyCode::BackTab);
        assert!(result.modifiers.contains(KeyModifiers::SHIFT));
    }

    #[test]
    fn test_parse_function_and_space() {
        assert_eq!(parse_key_string("f2").unwrap().code, KeyCode::F(2));
        assert_eq!(parse_key_string("space").unwrap().code, KeyCode::Char(' '));
        assert!(parse_key_string("f13").is_none());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_key_string("").is_none());
        assert!(parse_key_string("hyper+x").is_none());
        assert!(parse_key_string("notakey").is_none());
    }

    #[test]
    fn test_get_command_prefers_context() {
        let mut bindings: Keybindings<TestContext> = Keybindings::new();
        bindings.add_global("quit", vec!["q".to_string()]);
        bindings.add(TestContext::Form, "quit", vec!["esc".to_string()]);
        bindings.add(TestContext::Table, "focus_next", vec!["tab".to_string()]);

        let q = parse_key_string("q").unwrap();
        let esc = parse_key_string("esc").unwrap();
        let tab = parse_key_string("tab").unwrap();

        assert_eq!(bindings.get_command(q, TestContext::Table), Some("quit".into()));
        assert_eq!(bindings.get_command(esc, TestContext::Form), Some("quit".into()));
        assert_eq!(bindings.get_command(esc, TestContext::Table), None);
        assert_eq!(
            bindings.get_command(tab, TestContext::Table),
            Some("focus_next".into())
        );
        assert_eq!(bindings.get_command(tab, TestContext::Form), None);
    }

    #[test]
    fn test_uppercase_char_matches() {
        let mut bindings: Keybindings<TestContext> = Keybindings::new();
        bindings.add_global("dark", vec!["d".to_string()]);
        let upper = parse_key_string("D").unwrap();
        assert_eq!(bindings.get_command(upper, TestContext::Form), Some("dark".into()));
    }

    #[test]
    fn test_merge() {
        let mut defaults: Keybindings<TestContext> = Keybindings::new();
        defaults.add_global("quit", vec!["q".to_string()]);
        defaults.add_global("help", vec!["?".to_string()]);

        let mut user: Keybindings<TestContext> = Keybindings::new();
        user.add_global("quit", vec!["x".to_string()]);

        let merged = Keybindings::merge(defaults, user);
        assert_eq!(merged.global_bindings().get("quit"), Some(&vec!["x".to_string()]));
        assert_eq!(merged.global_bindings().get("help"), Some(&vec!["?".to_string()]));
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{ "global": { "quit": ["q"] }, "table": { "sort": ["s"] }, "bogus": {} }"#;
        let bindings = Keybindings::<TestContext>::from_json_str(json).unwrap();
        assert_eq!(
            bindings.get_first_keybinding("sort", TestContext::Table),
            Some("s".to_string())
        );
        assert_eq!(
            bindings.get_first_keybinding("quit", TestContext::Table),
            Some("q".to_string())
        );
    }

    #[test]
    fn test_from_json_str_rejects_bad_key() {
        let json = r#"{ "global": { "quit": ["meta+q"] } }"#;
        let err = Keybindings::<TestContext>::from_json_str(json).unwrap_err();
        assert!(matches!(err, KeybindingError::InvalidKey { ref key, .. } if key == "meta+q"));
    }

    #[test]
    fn test_format_key_for_display() {
        assert_eq!(format_key_for_display("q"), "Q");
        assert_eq!(format_key_for_display("ctrl+p"), "^P");
        assert_eq!(format_key_for_display("esc"), "Esc");
        assert_eq!(format_key_for_display("shift+tab"), "Shift+Tab");
        assert_eq!(format_key_for_display("f2"), "F2");
    }
}
