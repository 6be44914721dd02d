//! Creative inventory: the embedded item catalog and the registry it populates at startup.
#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod payload;
pub mod registry;
pub mod resolver;

pub use catalog::{CatalogEntry, VANILLA_CATALOG, parse_catalog};
pub use error::CatalogError;
pub use registry::{CreativeRegistry, SharedCreativeRegistry};
pub use resolver::{ResolveStats, bootstrap, bootstrap_from_str, resolve_entries};
