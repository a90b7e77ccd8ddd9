use crate::domain::model::{CatalogKind, CategoryCatalog};
use crate::domain::ports::CatalogProvider;
use std::collections::HashMap;

/// In-memory catalog snapshot for tests and embedding hosts that assemble
/// catalogs themselves. Categories never inserted read as missing, which the
/// engine treats as an unfilled slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogProvider {
    catalogs: HashMap<CatalogKind, CategoryCatalog>,
}

impl MemoryCatalogProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(mut self, catalog: CategoryCatalog) -> Self {
        self.insert(catalog);
        self
    }

    pub fn insert(&mut self, catalog: CategoryCatalog) {
        self.catalogs.insert(catalog.kind(), catalog);
    }
}

impl CatalogProvider for MemoryCatalogProvider {
    fn catalog(&self, kind: CatalogKind) -> Option<&CategoryCatalog> {
        self.catalogs.get(&kind)
    }
}
