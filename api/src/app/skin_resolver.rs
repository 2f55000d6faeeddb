//! Skin identity resolution
//!
//! Resolves skins by content hash. `find` treats absence as an ordinary answer;
//! `require` turns it into `DomainError::NotFound` for callers that assume the
//! skin exists.

use std::sync::Arc;

use crate::domain::entities::{Skin, SkinHash};
use crate::domain::ports::CatalogRepository;
use crate::error::DomainError;

pub struct SkinResolver<R>
where
    R: CatalogRepository,
{
    catalog: Arc<R>,
}

impl<R> SkinResolver<R>
where
    R: CatalogRepository,
{
    pub fn new(catalog: Arc<R>) -> Self {
        Self { catalog }
    }

    /// Look up a skin, returning `None` when no skin has this hash
    pub async fn find(&self, hash: &SkinHash) -> Result<Option<Skin>, DomainError> {
        self.catalog.find_by_hash(hash).await
    }

    /// Look up a skin that must exist
    pub async fn require(&self, hash: &SkinHash) -> Result<Skin, DomainError> {
        self.find(hash)
            .await?
            .ok_or_else(|| DomainError::NotFound(hash.to_string()))
    }
}
