//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod catalog_repo;


pub use catalog_repo::PostgresCatalogRepository;
