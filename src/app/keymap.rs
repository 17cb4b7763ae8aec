use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyConfig {
    pub profile: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
        }
    }
}

impl KeyConfig {
    /// Load the keymap config, falling back to the default profile when
    /// the file is missing or unreadable.
    #[must_use]
    pub fn load() -> Self {
        if let Some(path) = super::persistence::config_path("keymap.toml") {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(config) = toml::from_str::<KeyConfig>(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }
}

#[derive(Debug)]
pub struct KeyMap {
    // Bindings for Normal mode. The modal modes (search input, help,
    // theme selection) have a handful of fixed keys handled in input.rs.
    pub global: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    #[must_use]
    pub fn from_config(_config: &KeyConfig) -> Self {
        // Only the default profile exists so far; the config file is read
        // for forward compatibility with custom bindings.
        let mut global = HashMap::new();

        global.insert(key('q'), Action::Quit);
        global.insert(key('/'), Action::FocusSearch);
        global.insert(key('s'), Action::FocusSearch);
        global.insert(key('j'), Action::SelectNextCard);
        global.insert(key(KeyCode::Down), Action::SelectNextCard);
        global.insert(key('k'), Action::SelectPrevCard);
        global.insert(key(KeyCode::Up), Action::SelectPrevCard);
        global.insert(key('l'), Action::SelectNextSwatch);
        global.insert(key(KeyCode::Right), Action::SelectNextSwatch);
        global.insert(key(KeyCode::Tab), Action::SelectNextSwatch);
        global.insert(key('h'), Action::SelectPrevSwatch);
        global.insert(key(KeyCode::Left), Action::SelectPrevSwatch);
        global.insert(key('y'), Action::CopySelectedSwatch);
        global.insert(key(KeyCode::Enter), Action::CopySelectedSwatch);
        global.insert(key('?'), Action::ToggleHelp);
        global.insert(key('T'), Action::EnterThemeSelection);
        global.insert(key(KeyCode::Esc), Action::CancelMode);

        Self { global }
    }

    #[must_use]
    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        if let Some(action) = self.global.get(&event) {
            return Some(action.clone());
        }
        // Terminals report uppercase chars with SHIFT set; the bindings
        // are stored without it.
        if let KeyCode::Char(c) = event.code {
            if c.is_ascii_uppercase() && event.modifiers.contains(KeyModifiers::SHIFT) {
                let stripped = KeyEvent::new(event.code, event.modifiers - KeyModifiers::SHIFT);
                return self.global.get(&stripped).cloned();
            }
        }
        None
    }
}

trait IntoKeyCode {
    fn into_key_code(self) -> KeyCode;
}

impl IntoKeyCode for char {
    fn into_key_code(self) -> KeyCode {
        KeyCode::Char(self)
    }
}

impl IntoKeyCode for KeyCode {
    fn into_key_code(self) -> KeyCode {
        self
    }
}

fn key(code: impl IntoKeyCode) -> KeyEvent {
    KeyEvent::new(code.into_key_code(), KeyModifiers::empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_binds_the_core_keys() {
        let keymap = KeyMap::from_config(&KeyConfig::default());
        assert_eq!(keymap.get_action(key('/')), Some(Action::FocusSearch));
        assert_eq!(keymap.get_action(key('y')), Some(Action::CopySelectedSwatch));
        assert_eq!(keymap.get_action(key('q')), Some(Action::Quit));
        assert_eq!(keymap.get_action(key('x')), None);
    }

    #[test]
    fn shifted_uppercase_chars_still_resolve() {
        let keymap = KeyMap::from_config(&KeyConfig::default());
        let shifted = KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT);
        assert_eq!(keymap.get_action(shifted), Some(Action::EnterThemeSelection));
    }
}
