use crate::app::{action::Action, state::AppMode, state::AppState, ui};
use crate::components::palette_grid;
use crossterm::event::{Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::{Rect, Size};

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == crossterm::event::KeyEventKind::Release {
            return None;
        }
    }

    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);

    match app_state.mode {
        AppMode::SearchInput => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::CancelMode),
                KeyCode::Enter => Some(Action::SubmitSearch),
                KeyCode::Up => Some(Action::RecallPrevSearch),
                KeyCode::Down => Some(Action::RecallNextSearch),
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Action::ClearSearch)
                }
                _ => Some(Action::SearchKey(key)),
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let layout = ui::get_layout(area);
                    if contains(layout.search, mouse.column, mouse.row) {
                        None // already focused
                    } else if let Some((card, swatch)) = palette_grid::swatch_hit(
                        &app_state.results,
                        ui::results_inner(layout.body),
                        mouse.column,
                        mouse.row,
                    ) {
                        Some(Action::CopySwatchAt(card, swatch))
                    } else {
                        Some(Action::CancelMode)
                    }
                }
                _ => None,
            },
            _ => None,
        },

        // The search trigger is disabled while a lookup is in flight; the
        // only thing still honored is quitting.
        AppMode::Loading => match event {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Action::Quit)
                }
                _ => None,
            },
            _ => None,
        },

        AppMode::Help => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
                _ => None,
            },
            _ => None,
        },

        AppMode::ThemeSelection => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::CancelMode),
                KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectThemeNext),
                KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectThemePrev),
                KeyCode::Enter => app_state
                    .theme_selection
                    .as_ref()
                    .map(|selection| Action::SwitchTheme(selection.selected())),
                _ => None,
            },
            _ => None,
        },

        AppMode::Normal => match event {
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            Event::Key(key) => app_state.keymap.get_action(key),
            Event::Mouse(mouse) => {
                let layout = ui::get_layout(area);
                let grid_inner = ui::results_inner(layout.body);

                match mouse.kind {
                    MouseEventKind::ScrollUp => Some(Action::SelectPrevCard),
                    MouseEventKind::ScrollDown => Some(Action::SelectNextCard),
                    MouseEventKind::Down(MouseButton::Left) => {
                        if contains(layout.search, mouse.column, mouse.row) {
                            Some(Action::FocusSearch)
                        } else if let Some((card, swatch)) = palette_grid::swatch_hit(
                            &app_state.results,
                            grid_inner,
                            mouse.column,
                            mouse.row,
                        ) {
                            // Clicking a swatch is the copy gesture.
                            Some(Action::CopySwatchAt(card, swatch))
                        } else {
                            None
                        }
                    }
                    _ => None,
                }
            }
            _ => None,
        },
    }
}
