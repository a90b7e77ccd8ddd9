// Adapters layer: concrete CatalogProvider implementations for external data
// sources.

pub mod csv_catalog;
pub mod memory;

pub use csv_catalog::CsvCatalogProvider;
pub use memory::MemoryCatalogProvider;
