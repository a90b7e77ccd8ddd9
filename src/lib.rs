pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{CsvCatalogProvider, MemoryCatalogProvider};
pub use config::settings::EngineSettings;
pub use core::allocator::get_budget_allocation;
pub use core::engine::Engine;
pub use domain::model::{
    AllocationTable, Build, BuildQuote, BuildSlot, CatalogKind, CategoryCatalog, ComponentRecord,
    Recommendation, RequirementsRecord,
};
pub use domain::ports::CatalogProvider;
pub use utils::error::{RecError, Result};

#[cfg(feature = "cli")]
pub use config::CliConfig;
