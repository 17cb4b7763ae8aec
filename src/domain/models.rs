use std::fmt;

/// Display name given to palettes constructed without one.
pub const UNNAMED_PALETTE: &str = "Untitled";

/// A named, ordered list of hex color strings.
///
/// Immutable once constructed; owned by the `PaletteStore` (or by a
/// `SearchOutcome` snapshot handed to the UI).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub name: String,
    pub colors: Vec<String>,
}

impl Palette {
    #[must_use]
    pub fn new(name: Option<String>, colors: Vec<String>) -> Self {
        Self {
            name: name.unwrap_or_else(|| UNNAMED_PALETTE.to_string()),
            colors,
        }
    }

    #[must_use]
    pub fn named(name: impl Into<String>, colors: Vec<String>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} colors)", self.name, self.colors.len())
    }
}

/// Parse a `#RRGGBB` string into its RGB channels.
///
/// Returns `None` for anything that isn't exactly `#` followed by six hex
/// digits. Callers render a neutral fallback instead of panicking on bad
/// data.
#[must_use]
pub fn parse_hex(s: &str) -> Option<(u8, u8, u8)> {
    let rest = s.strip_prefix('#')?;
    if rest.len() != 6 || !rest.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&rest[0..2], 16).ok()?;
    let g = u8::from_str_radix(&rest[2..4], 16).ok()?;
    let b = u8::from_str_radix(&rest[4..6], 16).ok()?;
    Some((r, g, b))
}

/// The four mutually exclusive outcomes of one search invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Query was blank after trimming. Never reaches the matcher.
    Empty,
    /// No category key matched; carries the original query and the full
    /// list of valid keys as a recovery suggestion.
    NoMatch {
        query: String,
        suggestions: Vec<String>,
    },
    /// A category matched. `palettes` may be empty (defensive case,
    /// unreachable with the builtin data but still handled).
    Matched {
        category: String,
        palettes: Vec<Palette>,
    },
    /// Unexpected error during lookup; carries detail for the error state.
    Failure { message: String },
}
