use crate::app::{
    action::{Action, UpdateResult},
    state::AppState,
};

/// Swatch-cursor movement. Selection is view state only; it never touches
/// the store or triggers commands.
pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SelectNextCard => {
            state.results.next_card();
            UpdateResult::Handled(None)
        }
        Action::SelectPrevCard => {
            state.results.prev_card();
            UpdateResult::Handled(None)
        }
        Action::SelectNextSwatch => {
            state.results.next_swatch();
            UpdateResult::Handled(None)
        }
        Action::SelectPrevSwatch => {
            state.results.prev_swatch();
            UpdateResult::Handled(None)
        }
        Action::SelectSwatchAt(card, swatch) => {
            state.results.select(*card, *swatch);
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
