use crate::domain::models::Palette;

/// The rendered result set and the swatch cursor within it.
///
/// Always fully overwritten by the next search, never merged. Selection is
/// presentational only and never mutates the palettes themselves.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultsState {
    pub category: Option<String>,
    pub palettes: Vec<Palette>,
    pub selected_card: usize,
    pub selected_swatch: usize,
}

impl ResultsState {
    pub fn show(&mut self, category: String, palettes: Vec<Palette>) {
        self.category = Some(category);
        self.palettes = palettes;
        self.selected_card = 0;
        self.selected_swatch = 0;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    #[must_use]
    pub fn selected_palette(&self) -> Option<&Palette> {
        self.palettes.get(self.selected_card)
    }

    #[must_use]
    pub fn selected_color(&self) -> Option<&str> {
        self.selected_palette()
            .and_then(|p| p.colors.get(self.selected_swatch))
            .map(String::as_str)
    }

    /// Move the cursor to an exact swatch; out-of-range coordinates are
    /// ignored (stale mouse positions).
    pub fn select(&mut self, card: usize, swatch: usize) {
        if let Some(palette) = self.palettes.get(card) {
            if swatch < palette.colors.len() {
                self.selected_card = card;
                self.selected_swatch = swatch;
            }
        }
    }

    pub fn next_card(&mut self) {
        if self.palettes.is_empty() {
            return;
        }
        self.selected_card = (self.selected_card + 1) % self.palettes.len();
        self.clamp_swatch();
    }

    pub fn prev_card(&mut self) {
        if self.palettes.is_empty() {
            return;
        }
        self.selected_card = if self.selected_card == 0 {
            self.palettes.len() - 1
        } else {
            self.selected_card - 1
        };
        self.clamp_swatch();
    }

    pub fn next_swatch(&mut self) {
        if let Some(palette) = self.selected_palette() {
            let len = palette.colors.len();
            if len > 0 {
                self.selected_swatch = (self.selected_swatch + 1) % len;
            }
        }
    }

    pub fn prev_swatch(&mut self) {
        if let Some(palette) = self.selected_palette() {
            let len = palette.colors.len();
            if len > 0 {
                self.selected_swatch = if self.selected_swatch == 0 {
                    len - 1
                } else {
                    self.selected_swatch - 1
                };
            }
        }
    }

    fn clamp_swatch(&mut self) {
        let len = self
            .selected_palette()
            .map(|p| p.colors.len())
            .unwrap_or(0);
        if len == 0 {
            self.selected_swatch = 0;
        } else if self.selected_swatch >= len {
            self.selected_swatch = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_palettes() -> ResultsState {
        let mut results = ResultsState::default();
        results.show(
            "sunset".to_string(),
            vec![
                Palette::named(
                    "A",
                    vec!["#000000".into(), "#111111".into(), "#222222".into()],
                ),
                Palette::named("B", vec!["#333333".into(), "#444444".into()]),
            ],
        );
        results
    }

    #[test]
    fn show_resets_cursor() {
        let mut results = two_palettes();
        results.select(1, 1);
        results.show("ocean".to_string(), vec![Palette::named("C", vec!["#555555".into()])]);
        assert_eq!((results.selected_card, results.selected_swatch), (0, 0));
        assert_eq!(results.category.as_deref(), Some("ocean"));
    }

    #[test]
    fn swatch_navigation_wraps_within_card() {
        let mut results = two_palettes();
        results.prev_swatch();
        assert_eq!(results.selected_swatch, 2);
        results.next_swatch();
        assert_eq!(results.selected_swatch, 0);
    }

    #[test]
    fn card_navigation_wraps_and_clamps_swatch() {
        let mut results = two_palettes();
        results.select(0, 2);
        results.next_card();
        // Card B only has two colors; cursor clamps to the last one.
        assert_eq!((results.selected_card, results.selected_swatch), (1, 1));
        results.next_card();
        assert_eq!(results.selected_card, 0);
        results.prev_card();
        assert_eq!(results.selected_card, 1);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut results = two_palettes();
        results.select(5, 0);
        results.select(1, 9);
        assert_eq!((results.selected_card, results.selected_swatch), (0, 0));
    }

    #[test]
    fn selected_color_follows_cursor() {
        let mut results = two_palettes();
        assert_eq!(results.selected_color(), Some("#000000"));
        results.select(1, 1);
        assert_eq!(results.selected_color(), Some("#444444"));
        results.clear();
        assert_eq!(results.selected_color(), None);
    }
}
