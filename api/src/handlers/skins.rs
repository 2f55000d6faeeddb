//! Skin catalog handlers
//!
//! Endpoints for browsing the museum: paginated listings, hash lookups, and the
//! review history and archive members of a single skin.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::config::AssetUrls;
use crate::domain::entities::{
    ArchiveFile, FilterMode, Review, Skin, SkinHash, SortMode, DEFAULT_PAGE_SIZE,
};
use crate::domain::ports::CatalogRepository;
use crate::error::AppError;
use crate::AppState;

/// Listing query params
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_first")]
    pub first: u64,
    #[serde(default)]
    pub offset: u64,
    pub sort: Option<String>,
    pub filter: Option<String>,
}

fn default_first() -> u64 {
    DEFAULT_PAGE_SIZE
}

/// Skin card for listings and lookups
#[derive(Debug, Serialize)]
pub struct SkinCard {
    pub md5: String,
    pub filename: String,
    pub skin_type: String,
    pub moderation: String,
    pub nsfw: bool,
    pub tweeted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_color: Option<String>,
    pub screenshot_url: String,
    pub download_url: String,
    pub museum_url: String,
}

impl SkinCard {
    pub fn new(skin: Skin, urls: &AssetUrls) -> Self {
        Self {
            screenshot_url: urls.screenshot_url(&skin.hash),
            download_url: urls.download_url(&skin.hash),
            museum_url: urls.museum_url(&skin.hash, &skin.filename),
            nsfw: skin.nsfw(),
            tweeted: skin.tweeted(),
            md5: skin.hash.into_inner(),
            filename: skin.filename,
            skin_type: skin.skin_type.to_string(),
            moderation: skin.moderation.to_string(),
            average_color: skin.average_color,
        }
    }
}

/// Paginated listing response
#[derive(Debug, Serialize)]
pub struct SkinConnectionResponse {
    pub count: u64,
    pub nodes: Vec<SkinCard>,
}

#[derive(Debug, Serialize)]
pub struct ReviewCard {
    pub id: i32,
    pub rating: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,
}

impl From<Review> for ReviewCard {
    fn from(r: Review) -> Self {
        Self {
            id: r.id.0,
            rating: r.rating.to_string(),
            reviewer: r.reviewer,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ArchiveFileCard {
    pub file_name: String,
    pub file_md5: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uncompressed_size: Option<i64>,
    pub is_directory: bool,
}

impl From<ArchiveFile> for ArchiveFileCard {
    fn from(f: ArchiveFile) -> Self {
        Self {
            is_directory: f.is_directory(),
            file_name: f.file_name,
            file_md5: f.file_md5,
            file_date: f.file_date.map(|d| d.to_rfc3339()),
            uncompressed_size: f.uncompressed_size,
        }
    }
}

fn parse_hash(raw: &str) -> Result<SkinHash, AppError> {
    Ok(raw.parse::<SkinHash>()?)
}

/// GET /skins
///
/// One page of the catalog, optionally in museum order or filtered to approved skins.
pub async fn list_skins<R>(
    State(state): State<AppState<R>>,
    Query(params): Query<ListParams>,
) -> Result<Json<SkinConnectionResponse>, AppError>
where
    R: CatalogRepository + 'static,
{
    let sort = params
        .sort
        .as_deref()
        .map(str::parse::<SortMode>)
        .transpose()?;
    let filter = params
        .filter
        .as_deref()
        .map(str::parse::<FilterMode>)
        .transpose()?;

    let connection =
        state
            .catalog_service
            .list_catalog(params.first, params.offset, sort, filter)?;
    let (count, nodes) = tokio::try_join!(connection.count(), connection.nodes())?;

    Ok(Json(SkinConnectionResponse {
        count,
        nodes: nodes
            .into_iter()
            .map(|s| SkinCard::new(s, &state.asset_urls))
            .collect(),
    }))
}

/// GET /skins/:hash
pub async fn get_skin<R>(
    State(state): State<AppState<R>>,
    Path(hash): Path<String>,
) -> Result<Json<SkinCard>, AppError>
where
    R: CatalogRepository + 'static,
{
    let hash = parse_hash(&hash)?;
    let skin = state
        .catalog_service
        .lookup_by_hash(&hash)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No skin with hash {}", hash)))?;

    Ok(Json(SkinCard::new(skin, &state.asset_urls)))
}

/// GET /skins/:hash/reviews
pub async fn list_reviews<R>(
    State(state): State<AppState<R>>,
    Path(hash): Path<String>,
) -> Result<Json<Vec<ReviewCard>>, AppError>
where
    R: CatalogRepository + 'static,
{
    let hash = parse_hash(&hash)?;
    let reviews = state.catalog_service.reviews(&hash).await?;

    Ok(Json(reviews.into_iter().map(ReviewCard::from).collect()))
}

/// GET /skins/:hash/files
pub async fn list_archive_files<R>(
    State(state): State<AppState<R>>,
    Path(hash): Path<String>,
) -> Result<Json<Vec<ArchiveFileCard>>, AppError>
where
    R: CatalogRepository + 'static,
{
    let hash = parse_hash(&hash)?;
    let files = state.catalog_service.archive_files(&hash).await?;

    Ok(Json(files.into_iter().map(ArchiveFileCard::from).collect()))
}
