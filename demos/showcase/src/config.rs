//! Command line, data files and logging setup

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tui_kit::{KeybindingError, Keybindings};
use tui_kit_components::{
    sample_users, stories, ConfigError, Record, Theme, ThemeError, ThemeOverrides,
};

use crate::state::Focus;

/// Demo page for the tui-kit input field and data table
#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(about = "Input fields, a sortable table and a story browser in the terminal")]
pub struct Args {
    /// JSON array of user objects to show instead of the sample users
    #[arg(long, value_name = "FILE")]
    pub users: Option<PathBuf>,

    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,

    /// JSON file with keybindings merged over the defaults
    #[arg(long, value_name = "FILE")]
    pub keybindings: Option<PathBuf>,

    /// JSON file with `light` and `dark` color token overrides
    #[arg(long, value_name = "FILE")]
    pub theme: Option<PathBuf>,

    /// Write debug logs to this file
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Open the story browser at a story, e.g. `DataTable/Empty`
    #[arg(long, value_name = "NAME")]
    pub story: Option<String>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Keybindings(#[from] KeybindingError),
    #[error(transparent)]
    Theme(#[from] ThemeError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("unknown story `{0}`")]
    UnknownStory(String),
    #[error("failed to initialize logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

/// Theme file layout; either palette may be omitted
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    #[serde(default)]
    light: ThemeOverrides,
    #[serde(default)]
    dark: ThemeOverrides,
}

/// Install a file logger; without a path logging stays off
pub fn init_logging(path: Option<&Path>) -> Result<(), AppError> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("showcase=debug,tui_kit_core=debug,tui_kit_components=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init()?;
    Ok(())
}

/// Rows for the user table; the built-in sample without a path
pub fn load_users(path: Option<&Path>) -> Result<Vec<Record>, AppError> {
    let Some(path) = path else {
        return Ok(sample_users());
    };
    users_from_json(&std::fs::read_to_string(path)?)
}

fn users_from_json(json: &str) -> Result<Vec<Record>, AppError> {
    Ok(serde_json::from_str(json)?)
}

/// Light and dark palettes with any overrides from `path` applied
pub fn load_themes(path: Option<&Path>) -> Result<(Theme, Theme), AppError> {
    let Some(path) = path else {
        return Ok((Theme::light(), Theme::dark()));
    };
    let json = std::fs::read_to_string(path)?;
    themes_from_json(&json)
}

fn themes_from_json(json: &str) -> Result<(Theme, Theme), AppError> {
    let file: ThemeFile = serde_json::from_str(json)?;
    Ok((file.light.apply(Theme::light())?, file.dark.apply(Theme::dark())?))
}

pub fn default_keybindings() -> Keybindings<Focus> {
    let keys = |ks: &[&str]| ks.iter().map(|k| k.to_string()).collect::<Vec<_>>();
    let mut bindings = Keybindings::new();

    bindings.add_global("quit", keys(&["ctrl+q", "ctrl+c"]));
    bindings.add_global("focus_next", keys(&["tab"]));
    bindings.add_global("focus_prev", keys(&["shift+tab"]));
    bindings.add_global("toggle_dark", keys(&["ctrl+d"]));
    bindings.add_global("stories", keys(&["f2"]));

    bindings.add(Focus::Stories, "next_story", keys(&["right", "l", "n"]));
    bindings.add(Focus::Stories, "prev_story", keys(&["left", "h", "p"]));
    bindings.add(Focus::Stories, "stories", keys(&["esc", "f2"]));
    bindings.add(Focus::Stories, "quit", keys(&["q", "ctrl+q", "ctrl+c"]));
    bindings
}

pub fn load_keybindings(path: Option<&Path>) -> Result<Keybindings<Focus>, AppError> {
    let defaults = default_keybindings();
    match path {
        Some(path) => Ok(Keybindings::merge(defaults, Keybindings::load(path)?)),
        None => Ok(defaults),
    }
}

/// Position of the story named `Component/Name` (case-insensitive)
pub fn story_index(name: &str) -> Result<usize, AppError> {
    stories()
        .iter()
        .position(|s| s.to_string().eq_ignore_ascii_case(name))
        .ok_or_else(|| AppError::UnknownStory(name.to_string()))
}
