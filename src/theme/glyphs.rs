//! Nerd-font glyphs used by the chrome widgets. Plain-ASCII fallbacks are
//! deliberately not provided; the target audience already runs a patched
//! font for the rest of their tooling.

pub const LOGO: &str = "\u{f03e}"; // picture frame
pub const SEP_RIGHT: &str = "\u{e0b0}"; // powerline separator
pub const SWATCH: &str = "\u{f04d}"; // filled square
pub const SEARCH: &str = "\u{f002}"; // magnifier
