use crate::domain::models::Palette;
use crate::domain::source::PaletteSource;
use crate::domain::store::PaletteStore;
use anyhow::{anyhow, Result};
use async_trait::async_trait;

/// `PaletteSource` backed by the builtin in-memory table.
pub struct BuiltinSource {
    store: PaletteStore,
}

impl BuiltinSource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: PaletteStore::builtin(),
        }
    }

    #[must_use]
    pub fn with_store(store: PaletteStore) -> Self {
        Self { store }
    }
}

impl Default for BuiltinSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaletteSource for BuiltinSource {
    async fn categories(&self) -> Result<Vec<String>> {
        Ok(self.store.categories())
    }

    async fn palettes(&self, category: &str) -> Result<Vec<Palette>> {
        self.store
            .get(category)
            .map(<[Palette]>::to_vec)
            .ok_or_else(|| anyhow!("unknown category: {category}"))
    }
}
