use crate::app::{
    action::Action, command::Command, input::map_event_to_action, reducer, state::AppState, ui,
};
use crate::domain::clipboard::ClipboardWriter;
use crate::domain::matcher;
use crate::domain::models::SearchOutcome;
use crate::domain::source::PaletteSource;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    source: Arc<dyn PaletteSource>,
    clipboard: Arc<dyn ClipboardWriter>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, source, clipboard, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    source: Arc<dyn PaletteSource>,
    clipboard: Arc<dyn ClipboardWriter>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = match res {
                    Ok(e) => e,
                    Err(e) => return Err(e.into()),
                };
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::Quit = action {
                break;
            }

            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, source.clone(), clipboard.clone(), action_tx.clone());
            }
        }
    }

    Ok(())
}

/// Execute a side effect on a worker task; the result comes back to the
/// main loop as an action.
pub(crate) fn handle_command(
    command: Command,
    source: Arc<dyn PaletteSource>,
    clipboard: Arc<dyn ClipboardWriter>,
    tx: mpsc::Sender<Action>,
) {
    match command {
        Command::Search(query) => {
            tokio::spawn(async move {
                let outcome = run_search(&query, source.as_ref()).await;
                let _ = tx.send(Action::SearchResolved(outcome)).await;
            });
        }
        Command::Copy(text) => {
            tokio::spawn(async move {
                let joined = tokio::task::spawn_blocking(move || {
                    clipboard.set_text(&text).map(|()| text)
                })
                .await;
                let result = match joined {
                    Ok(Ok(hex)) => Ok(hex),
                    Ok(Err(e)) => Err(e.to_string()),
                    Err(e) => Err(e.to_string()),
                };
                let _ = tx.send(Action::CopyCompleted(result)).await;
            });
        }
    }
}

/// The matching pipeline: enumerate keys, match, look up.
///
/// Every exit path funnels into a `SearchOutcome`; nothing escapes as a
/// bare error, so the loading bracket upstream always releases.
async fn run_search(query: &str, source: &dyn PaletteSource) -> SearchOutcome {
    let categories = match source.categories().await {
        Ok(categories) => categories,
        Err(e) => {
            return SearchOutcome::Failure {
                message: e.to_string(),
            }
        }
    };

    let matched = matcher::match_category(query, &categories).map(str::to_string);
    match matched {
        None => SearchOutcome::NoMatch {
            query: query.to_string(),
            suggestions: categories,
        },
        Some(category) => match source.palettes(&category).await {
            Ok(palettes) => SearchOutcome::Matched { category, palettes },
            Err(e) => SearchOutcome::Failure {
                message: e.to_string(),
            },
        },
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
