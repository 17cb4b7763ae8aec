use super::keymap::{KeyConfig, KeyMap};
use std::sync::Arc;

pub mod error;
pub mod results;
pub mod search;
pub mod status;
pub mod theme;

// Re-exports
pub use error::{ErrorSeverity, ErrorState};
pub use results::ResultsState;
pub use search::{SearchInput, SearchState};
pub use status::{StatusKind, StatusLine, StatusState, TRANSIENT_TTL};
pub use theme::ThemeSelectionState;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Normal,         // Navigating result cards and swatches
    SearchInput,    // Typing in the search bar
    Loading,        // A search is in flight; the trigger is disabled
    Help,           // Showing the help overlay
    ThemeSelection, // Choosing a UI theme
}

#[derive(Debug)]
pub struct AppState<'a> {
    // --- Lifecycle & feedback ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub last_error: Option<ErrorState>,
    pub status: StatusState,

    // --- Search pipeline ---
    pub search: SearchState<'a>,
    pub results: ResultsState,

    // --- Theme Selection ---
    pub theme_selection: Option<ThemeSelectionState>,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: crate::theme::PaletteType,
    pub theme: crate::theme::Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: KeyConfig) -> Self {
        let palette_type = super::persistence::load_theme_choice()
            .unwrap_or(crate::theme::PaletteType::CatppuccinMocha);
        Self {
            keymap: Arc::new(KeyMap::from_config(&config)),
            search: SearchState::with_recent(super::persistence::load_recent_searches()),
            palette_type,
            theme: crate::theme::Theme::from_palette_type(palette_type),
            ..Default::default()
        }
    }

    /// True while a search is in flight; the search trigger is disabled.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.mode == AppMode::Loading
    }

    #[must_use]
    pub fn selected_color(&self) -> Option<&str> {
        self.results.selected_color()
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            last_error: None,
            status: StatusState::default(),
            search: SearchState::default(),
            results: ResultsState::default(),
            theme_selection: None,
            frame_count: 0,
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            palette_type: crate::theme::PaletteType::CatppuccinMocha,
            theme: crate::theme::Theme::default(),
        }
    }
}
