use crate::domain::models::Palette;
use anyhow::Result;
use async_trait::async_trait;

/// Lookup facade the search pipeline runs against.
///
/// The production implementation wraps the builtin `PaletteStore`; tests
/// substitute a mock. Lookups are modeled as async so the loading bracket
/// around a search wraps a real suspension point, whatever the backing
/// store turns out to be.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaletteSource: Send + Sync {
    /// Category keys in definition order.
    async fn categories(&self) -> Result<Vec<String>>;

    /// All palettes filed under `category`.
    async fn palettes(&self, category: &str) -> Result<Vec<Palette>>;
}
