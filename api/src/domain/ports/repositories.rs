//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{ArchiveFile, EntryPredicate, Review, Skin, SkinHash};
use crate::domain::ranking::RankingPolicy;
use crate::error::DomainError;

/// Read-only access to the skin catalog
///
/// Every call reads the latest committed state; nothing is cached here.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Count skins matching a predicate
    async fn count_entries(&self, predicate: &EntryPredicate) -> Result<u64, DomainError>;

    /// List skins matching a predicate in store order (row id ascending)
    async fn query_entries(
        &self,
        predicate: &EntryPredicate,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<Skin>, DomainError>;

    /// Find a skin of any type by content hash
    async fn find_by_hash(&self, hash: &SkinHash) -> Result<Option<Skin>, DomainError>;

    /// Hashes of one window of the museum order over all classic skins
    async fn find_curatorial_page(
        &self,
        policy: &RankingPolicy,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<SkinHash>, DomainError>;

    /// Review history of a skin, newest first
    async fn find_reviews(&self, hash: &SkinHash) -> Result<Vec<Review>, DomainError>;

    /// Members of a skin's archive, ordered by file name
    async fn find_archive_files(&self, hash: &SkinHash) -> Result<Vec<ArchiveFile>, DomainError>;
}
