use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::{AppMode, AppState, ThemeSelectionState},
};
use std::time::Instant;

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    // Feature reducers get first refusal; the arms below are app chrome.
    match features::search::update(state, &action) {
        UpdateResult::Handled(command) => return command,
        UpdateResult::NotHandled => {}
    }
    match features::navigation::update(state, &action) {
        UpdateResult::Handled(command) => return command,
        UpdateResult::NotHandled => {}
    }

    match action {
        // --- Mode Switching ---
        Action::CancelMode => {
            // Esc never interrupts a search; Loading releases on its own
            // when the outcome arrives.
            if state.mode != AppMode::Loading {
                state.mode = AppMode::Normal;
            }
            state.last_error = None;
            state.theme_selection = None;
            state.search.recent_index = None;
        }
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
        }
        Action::Quit => {
            state.should_quit = true;
        }

        // --- Theme Selection ---
        Action::EnterThemeSelection => {
            state.mode = AppMode::ThemeSelection;
            state.theme_selection = Some(ThemeSelectionState::starting_at(state.palette_type));
        }
        Action::SelectThemeNext => {
            if let Some(selection) = &mut state.theme_selection {
                selection.next();
            }
        }
        Action::SelectThemePrev => {
            if let Some(selection) = &mut state.theme_selection {
                selection.prev();
            }
        }
        Action::SwitchTheme(palette_type) => {
            state.palette_type = palette_type;
            state.theme = crate::theme::Theme::from_palette_type(palette_type);
            super::persistence::save_theme_choice(palette_type);
            state.theme_selection = None;
            state.mode = AppMode::Normal;
            state.status.set_transient(
                super::state::StatusLine::info(format!(
                    "Theme switched to {}",
                    palette_type.label()
                )),
                Instant::now(),
                super::state::TRANSIENT_TTL,
            );
        }

        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            state.status.tick(Instant::now());
        }

        _ => {}
    }
    None
}
