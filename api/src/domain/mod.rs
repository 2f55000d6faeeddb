//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing the skin catalog
//! - `ranking`: The museum ordering policy
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
pub mod ranking;
