//! Skin Museum API
//!
//! Read-only catalog of community skins: hash lookups, paginated listings, and the
//! curated museum ordering. Uses hexagonal (ports & adapters) architecture for clean
//! separation of concerns.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod entity;
pub mod error;
pub mod handlers;

#[cfg(test)]
mod test_utils;


use app::CatalogService;
use config::AssetUrls;
use domain::ports::CatalogRepository;

/// Application state shared across all handlers
pub struct AppState<R>
where
    R: CatalogRepository,
{
    pub catalog_service: Arc<CatalogService<R>>,
    pub asset_urls: AssetUrls,
}

impl<R> Clone for AppState<R>
where
    R: CatalogRepository,
{
    fn clone(&self) -> Self {
        Self {
            catalog_service: self.catalog_service.clone(),
            asset_urls: self.asset_urls.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the API routes (middleware is layered on by the binary)
pub fn router<R>(state: AppState<R>) -> Router
where
    R: CatalogRepository + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/skins", get(handlers::list_skins::<R>))
        .route("/skins/:hash", get(handlers::get_skin::<R>))
        .route("/skins/:hash/reviews", get(handlers::list_reviews::<R>))
        .route("/skins/:hash/files", get(handlers::list_archive_files::<R>))
        .with_state(state)
}
