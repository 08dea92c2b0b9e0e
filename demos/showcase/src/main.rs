//! Showcase - the tui-kit demo page
//!
//! Four input fields (clearable, password with toggle, loading, invalid) next
//! to a selectable user table, with a light/dark switch and a story browser.
//!
//! Flow:
//! 1. Terminal event -> keybinding command, or widget `handle_event()` -> actions
//! 2. Actions dispatched through the store (logged by middleware)
//! 3. Reducer updates state; the page re-renders
//!
//! # Usage
//!
//! ```sh
//! cargo run -p showcase
//! cargo run -p showcase -- --dark --log showcase.log
//! cargo run -p showcase -- --story DataTable/Selectable
//! cargo run -p showcase -- --users people.json
//! ```

mod action;
mod config;
mod reducer;
mod state;
mod ui;

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tui_kit::{
    process_raw_event, spawn_event_poller, EventKind, Keybindings, LoggingMiddleware,
    PollerConfig, RawEvent, StoreWithMiddleware,
};

use crate::action::AppAction;
use crate::config::{
    init_logging, load_keybindings, load_themes, load_users, story_index, AppError, Args,
};
use crate::reducer::reducer;
use crate::state::{AppState, Focus, Screen};
use crate::ui::Ui;

/// Spinner frame interval
const TICK: Duration = Duration::from_millis(80);

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();
    init_logging(args.log.as_deref())?;

    // Load everything that can fail before entering TUI mode
    let users = load_users(args.users.as_deref())?;
    let (light, dark) = load_themes(args.theme.as_deref())?;
    let keybindings = load_keybindings(args.keybindings.as_deref())?;
    let story = args.story.as_deref().map(story_index).transpose()?;
    let ui = Ui::new()?;

    let mut state = AppState::new(users, light, dark);
    state.dark = args.dark;
    if let Some(index) = story {
        state.screen = Screen::Stories;
        state.story = index;
    }
    info!(users = state.users.len(), dark = state.dark, "Starting showcase");

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, state, ui, keybindings).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: AppState,
    mut ui: Ui,
    keybindings: Keybindings<Focus>,
) -> Result<(), AppError> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<AppAction>();
    let mut store =
        StoreWithMiddleware::new(state, reducer, LoggingMiddleware::new().changes_only());

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _handle = spawn_event_poller(event_tx, PollerConfig::default(), cancel_token.clone());

    let mut ticker = tokio::time::interval(TICK);
    let mut should_render = true;

    loop {
        if should_render {
            terminal.draw(|frame| ui.render(frame, store.state(), &keybindings))?;
            should_render = false;
        }

        tokio::select! {
            Some(raw_event) = event_rx.recv() => {
                let event = process_raw_event(raw_event);

                let command = match &event {
                    EventKind::Key(key) if key.kind == KeyEventKind::Release => continue,
                    EventKind::Key(key) => keybindings
                        .get_command(*key, store.state().context())
                        .and_then(|command| AppAction::from_command(&command)),
                    _ => None,
                };

                match command {
                    Some(action) => {
                        let _ = action_tx.send(action);
                    }
                    None => {
                        let actions = ui.handle_event(&event, store.state());
                        store.dispatch_all(actions);
                    }
                }
                // Widgets keep cursor and scroll state of their own
                should_render = true;
            }

            Some(action) = action_rx.recv() => {
                if matches!(action, AppAction::Quit) {
                    break;
                }
                should_render |= store.dispatch(action);
            }

            _ = ticker.tick() => {
                ui.handle_event(&EventKind::Tick, store.state());
                should_render = true;
            }
        }
    }

    info!("Shutting down");
    cancel_token.cancel();
    Ok(())
}
