pub mod catalog;
pub mod closed_set;
pub mod config;
pub mod deal;
pub mod extracted;
pub mod strategy;
pub mod taxonomy;

pub use catalog::{CatalogEntry, catalog_contains};
pub use closed_set::ClosedSet;
pub use config::{Config, PipelineConfig};
pub use deal::*;
pub use strategy::*;
pub use taxonomy::TaxonomyDecision;
