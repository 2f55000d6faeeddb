//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod catalog_service;
pub mod skin_resolver;

pub use catalog_service::{CatalogConnection, CatalogService};
pub use skin_resolver::SkinResolver;
