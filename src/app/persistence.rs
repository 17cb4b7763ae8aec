use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
struct RecentSearches {
    searches: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeChoice {
    theme: PaletteType,
}

pub fn config_path(file: &str) -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("swatchbook");
        path.push(file);
        path
    })
}

pub fn load_recent_searches() -> Vec<String> {
    config_path("recent_searches.toml")
        .map(|path| load_recent_from(&path))
        .unwrap_or_default()
}

pub fn save_recent_searches(searches: &[String]) {
    if let Some(path) = config_path("recent_searches.toml") {
        save_recent_to(&path, searches);
    }
}

pub fn load_theme_choice() -> Option<PaletteType> {
    let path = config_path("theme.toml")?;
    load_theme_from(&path)
}

pub fn save_theme_choice(theme: PaletteType) {
    if let Some(path) = config_path("theme.toml") {
        save_theme_to(&path, theme);
    }
}

fn load_recent_from(path: &Path) -> Vec<String> {
    if let Ok(content) = std::fs::read_to_string(path) {
        if let Ok(recent) = toml::from_str::<RecentSearches>(&content) {
            return recent.searches;
        }
    }
    Vec::new()
}

fn save_recent_to(path: &Path, searches: &[String]) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let recent = RecentSearches {
        searches: searches.to_vec(),
    };

    if let Ok(content) = toml::to_string(&recent) {
        let _ = std::fs::write(path, content);
    }
}

fn load_theme_from(path: &Path) -> Option<PaletteType> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str::<ThemeChoice>(&content)
        .ok()
        .map(|choice| choice.theme)
}

fn save_theme_to(path: &Path, theme: PaletteType) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    if let Ok(content) = toml::to_string(&ThemeChoice { theme }) {
        let _ = std::fs::write(path, content);
    }
}
