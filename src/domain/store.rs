use super::models::Palette;

/// Immutable, ordered mapping from category key to palettes.
///
/// Constructed once at startup and never mutated. Key enumeration order is
/// the definition order, which the matcher relies on for its first-match
/// tie-break.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteStore {
    entries: Vec<(String, Vec<Palette>)>,
}

impl PaletteStore {
    /// Build a store from `(category, palettes)` pairs.
    ///
    /// Keys must be non-empty lowercase words, unique within the store.
    /// Violations are programmer errors in static data, so they only
    /// trip debug assertions.
    #[must_use]
    pub fn from_entries(entries: Vec<(String, Vec<Palette>)>) -> Self {
        debug_assert!(entries.iter().all(|(k, _)| {
            !k.is_empty() && k.chars().all(|c| c.is_ascii_lowercase())
        }));
        debug_assert!({
            let mut keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
            keys.sort_unstable();
            keys.windows(2).all(|w| w[0] != w[1])
        });
        Self { entries }
    }

    /// Category keys in definition order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }

    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[Palette]> {
        self.entries
            .iter()
            .find(|(k, _)| k == category)
            .map(|(_, v)| v.as_slice())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The builtin palette table: six categories, two palettes each, five
    /// colors per palette.
    #[must_use]
    pub fn builtin() -> Self {
        fn pal(name: &str, colors: [&str; 5]) -> Palette {
            Palette::named(name, colors.iter().map(|c| (*c).to_string()).collect())
        }

        Self::from_entries(vec![
            (
                "sunset".to_string(),
                vec![
                    pal(
                        "Sunset Blaze",
                        ["#FF6B6B", "#FFA500", "#FFD700", "#FF8C00", "#DC143C"],
                    ),
                    pal(
                        "Dusk Ember",
                        ["#FF7E5F", "#FEB47B", "#FF6F91", "#C06C84", "#6C5B7B"],
                    ),
                ],
            ),
            (
                "ocean".to_string(),
                vec![
                    pal(
                        "Deep Current",
                        ["#013A63", "#01497C", "#2A6F97", "#61A5C2", "#A9D6E5"],
                    ),
                    pal(
                        "Coral Shallows",
                        ["#006D77", "#83C5BE", "#EDF6F9", "#FFDDD2", "#E29578"],
                    ),
                ],
            ),
            (
                "forest".to_string(),
                vec![
                    pal(
                        "Old Growth",
                        ["#1B4332", "#2D6A4F", "#40916C", "#74C69D", "#B7E4C7"],
                    ),
                    pal(
                        "Autumn Floor",
                        ["#606C38", "#283618", "#FEFAE0", "#DDA15E", "#BC6C25"],
                    ),
                ],
            ),
            (
                "pastel".to_string(),
                vec![
                    pal(
                        "Cotton Candy",
                        ["#FFADAD", "#FFD6A5", "#FDFFB6", "#CAFFBF", "#BDB2FF"],
                    ),
                    pal(
                        "Sea Glass",
                        ["#CDEAC0", "#FFE5D9", "#D8E2DC", "#FFCAD4", "#F4ACB7"],
                    ),
                ],
            ),
            (
                "vibrant".to_string(),
                vec![
                    pal(
                        "Neon Arcade",
                        ["#FF0054", "#FF5400", "#FFBD00", "#9E0059", "#390099"],
                    ),
                    pal(
                        "Electric Pop",
                        ["#F72585", "#7209B7", "#3A0CA3", "#4361EE", "#4CC9F0"],
                    ),
                ],
            ),
            (
                "cool".to_string(),
                vec![
                    pal(
                        "Arctic Drift",
                        ["#CAF0F8", "#90E0EF", "#00B4D8", "#0077B6", "#03045E"],
                    ),
                    pal(
                        "Winter Slate",
                        ["#8E9AAF", "#CBC0D3", "#EFD3D7", "#FEEAFA", "#DEE2FF"],
                    ),
                ],
            ),
        ])
    }
}
