use crate::theme::PaletteType;

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSelectionState {
    pub selected_index: usize,
    pub themes: Vec<PaletteType>,
}

impl ThemeSelectionState {
    #[must_use]
    pub fn starting_at(current: PaletteType) -> Self {
        let themes = PaletteType::all().to_vec();
        let selected_index = themes.iter().position(|t| *t == current).unwrap_or(0);
        Self {
            selected_index,
            themes,
        }
    }

    #[must_use]
    pub fn selected(&self) -> PaletteType {
        self.themes[self.selected_index]
    }

    pub fn next(&mut self) {
        self.selected_index = (self.selected_index + 1) % self.themes.len();
    }

    pub fn prev(&mut self) {
        self.selected_index = if self.selected_index == 0 {
            self.themes.len() - 1
        } else {
            self.selected_index - 1
        };
    }
}

impl Default for ThemeSelectionState {
    fn default() -> Self {
        Self::starting_at(PaletteType::CatppuccinMocha)
    }
}
