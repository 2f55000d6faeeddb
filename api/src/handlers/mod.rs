//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod skins;

pub use skins::{get_skin, list_archive_files, list_reviews, list_skins};
