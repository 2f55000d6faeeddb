//! Catalog service
//!
//! Resolves paginated catalog listings. A listing is validated into a
//! `PageRequest` before any store access, then exposed as a `CatalogConnection`
//! whose total count and page nodes are fetched on demand.

use futures::stream::{self, StreamExt, TryStreamExt};
use std::sync::Arc;

use super::SkinResolver;
use crate::domain::entities::{
    ArchiveFile, CatalogQuery, FilterMode, PageRequest, Review, Skin, SkinHash, SortMode,
};
use crate::domain::ports::CatalogRepository;
use crate::domain::ranking::RankingPolicy;
use crate::error::DomainError;

/// Most skin lookups a museum page keeps in flight at once
pub const HYDRATE_CONCURRENCY: usize = 16;

/// Service for catalog lookups and listings
pub struct CatalogService<R>
where
    R: CatalogRepository,
{
    catalog: Arc<R>,
    resolver: SkinResolver<R>,
    policy: Arc<RankingPolicy>,
}

impl<R> CatalogService<R>
where
    R: CatalogRepository,
{
    pub fn new(catalog: Arc<R>) -> Self {
        Self {
            resolver: SkinResolver::new(catalog.clone()),
            catalog,
            policy: Arc::new(RankingPolicy::default()),
        }
    }

    pub fn with_policy(mut self, policy: RankingPolicy) -> Self {
        self.policy = Arc::new(policy);
        self
    }

    // ========== Lookups ==========

    /// Look up a skin by hash; `None` when the catalog has no such skin
    pub async fn lookup_by_hash(&self, hash: &SkinHash) -> Result<Option<Skin>, DomainError> {
        self.resolver.find(hash).await
    }

    /// Review history of a skin, newest first
    pub async fn reviews(&self, hash: &SkinHash) -> Result<Vec<Review>, DomainError> {
        self.resolver.require(hash).await?;
        self.catalog.find_reviews(hash).await
    }

    /// Members of a skin's archive
    pub async fn archive_files(&self, hash: &SkinHash) -> Result<Vec<ArchiveFile>, DomainError> {
        self.resolver.require(hash).await?;
        self.catalog.find_archive_files(hash).await
    }

    // ========== Listings ==========

    /// Validate listing parameters and return the matching connection
    pub fn list_catalog(
        &self,
        first: u64,
        offset: u64,
        sort: Option<SortMode>,
        filter: Option<FilterMode>,
    ) -> Result<CatalogConnection<'_, R>, DomainError> {
        let page = PageRequest::new(first, offset, sort, filter)?;
        Ok(self.connection(page))
    }

    pub fn connection(&self, page: PageRequest) -> CatalogConnection<'_, R> {
        CatalogConnection {
            service: self,
            page,
        }
    }

    /// Load one skin named by the museum order
    ///
    /// A ranked hash the store cannot load means the ranking and the skins table
    /// disagree, which is a data fault rather than a missing skin.
    async fn hydrate(&self, hash: &SkinHash) -> Result<Skin, DomainError> {
        self.resolver.require(hash).await.map_err(|e| match e {
            DomainError::NotFound(missing) => {
                tracing::error!(
                    skin = %missing,
                    "Museum order references a skin that cannot be loaded"
                );
                DomainError::Consistency(format!(
                    "Museum order references missing skin {}",
                    missing
                ))
            }
            other => other,
        })
    }
}

/// One validated listing: a total count plus one page of nodes
pub struct CatalogConnection<'a, R>
where
    R: CatalogRepository,
{
    service: &'a CatalogService<R>,
    page: PageRequest,
}

impl<'a, R> CatalogConnection<'a, R>
where
    R: CatalogRepository,
{
    /// Number of skins the listing covers, ignoring pagination
    pub async fn count(&self) -> Result<u64, DomainError> {
        let predicate = self.page.query().predicate();
        self.service.catalog.count_entries(&predicate).await
    }

    /// The skins on this page, in listing order
    pub async fn nodes(&self) -> Result<Vec<Skin>, DomainError> {
        let (first, offset) = (self.page.first(), self.page.offset());
        tracing::debug!(first, offset, query = ?self.page.query(), "Resolving catalog page");

        match self.page.query() {
            CatalogQuery::Curatorial => {
                let hashes = self
                    .service
                    .catalog
                    .find_curatorial_page(&self.service.policy, first, offset)
                    .await?;
                let service = self.service;
                stream::iter(hashes.into_iter().map(|h| async move { service.hydrate(&h).await }))
                    .buffered(HYDRATE_CONCURRENCY)
                    .try_collect()
                    .await
            }
            query => {
                self.service
                    .catalog
                    .query_entries(&query.predicate(), first, offset)
                    .await
            }
        }
    }
}
