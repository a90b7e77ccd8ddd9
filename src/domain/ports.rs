use crate::domain::model::{CatalogKind, CategoryCatalog};

/// Read-only access to one catalog snapshot. Implementations own the loaded
/// tables; the engine only borrows them, so concurrent requests can share a
/// snapshot without locking. A `None` category at request time simply leaves
/// that slot unfilled (missing data at load time is the adapter's problem).
pub trait CatalogProvider: Send + Sync {
    fn catalog(&self, kind: CatalogKind) -> Option<&CategoryCatalog>;
}
