use crate::app::command::Command;
use crate::domain::models::SearchOutcome;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Search Intents ---
    FocusSearch,                               // Focus the search bar (/)
    SubmitSearch,                              // Validate and run the current query
    SearchKey(crossterm::event::KeyEvent),     // Keystroke into the search bar
    RecallPrevSearch,                          // Older recent query
    RecallNextSearch,                          // Newer recent query
    ClearSearch,                               // Wipe the query text

    // --- Swatch Navigation ---
    SelectNextCard,
    SelectPrevCard,
    SelectNextSwatch,
    SelectPrevSwatch,
    SelectSwatchAt(usize, usize), // (card, swatch) from a mouse hit

    // --- Clipboard Intents ---
    CopySelectedSwatch,          // Copy the color under the cursor
    CopySwatchAt(usize, usize),  // Click on a swatch: select it and copy

    // --- UI Mode Transitions ---
    CancelMode,                                  // ESC key (close modal/mode)
    ToggleHelp,                                  // Toggle the help overlay (?)
    EnterThemeSelection,                         // Open theme selection modal (T)
    SelectThemeNext,                             // Next theme in selection
    SelectThemePrev,                             // Previous theme in selection
    SwitchTheme(crate::theme::PaletteType),      // Apply a new theme

    // --- Async Results (The "Callback") ---
    // Dispatched by the workers back to the main loop
    SearchResolved(SearchOutcome),          // Lookup finished, one of four variants
    CopyCompleted(Result<String, String>),  // Clipboard write result (hex or error)
}
