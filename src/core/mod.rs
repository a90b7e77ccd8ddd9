pub mod allocator;
pub mod engine;
pub mod matcher;
pub mod selector;
pub mod upgrader;

pub use crate::domain::model::{
    AllocationTable, Build, BuildQuote, BuildSlot, CatalogKind, CategoryCatalog, ComponentRecord,
    Recommendation, RequirementsRecord,
};
pub use crate::domain::ports::CatalogProvider;
pub use crate::utils::error::Result;
