//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{ArchiveFile, EntryPredicate, Review, Skin, SkinHash};
use crate::domain::ports::CatalogRepository;
use crate::domain::ranking::RankingPolicy;
use crate::error::DomainError;

// ============================================================================
// In-Memory Catalog Repository
// ============================================================================

/// Skins are kept in insertion order, which stands in for row id order.
#[derive(Default)]
pub struct InMemoryCatalogRepository {
    skins: Arc<RwLock<Vec<Skin>>>,
    reviews: Arc<RwLock<HashMap<SkinHash, Vec<Review>>>>,
    archive_files: Arc<RwLock<HashMap<SkinHash, Vec<ArchiveFile>>>>,
    /// Skins that still rank but can no longer be hydrated
    unhydratable: Arc<RwLock<HashSet<SkinHash>>>,
    failure: Arc<RwLock<Option<String>>>,
    calls: AtomicUsize,
    lookups_in_flight: AtomicUsize,
    max_lookups_in_flight: AtomicUsize,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a skin for testing
    pub fn with_skin(self, skin: Skin) -> Self {
        self.skins.write().unwrap().push(skin);
        self
    }

    pub fn with_skins(self, skins: impl IntoIterator<Item = Skin>) -> Self {
        self.skins.write().unwrap().extend(skins);
        self
    }

    /// Record a review; lookups return the history newest first
    pub fn with_review(self, review: Review) -> Self {
        self.reviews
            .write()
            .unwrap()
            .entry(review.skin_hash.clone())
            .or_default()
            .push(review);
        self
    }

    pub fn with_archive_file(self, file: ArchiveFile) -> Self {
        self.archive_files
            .write()
            .unwrap()
            .entry(file.skin_hash.clone())
            .or_default()
            .push(file);
        self
    }

    /// Keep the skin in the museum order but make hash lookups miss it
    pub fn with_unhydratable(self, hash: SkinHash) -> Self {
        self.unhydratable.write().unwrap().insert(hash);
        self
    }

    /// Make every store call fail with a database error
    pub fn failing(self, message: &str) -> Self {
        *self.failure.write().unwrap() = Some(message.to_string());
        self
    }

    /// Number of store calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Highest number of `find_by_hash` calls seen in flight together
    pub fn max_concurrent_lookups(&self) -> usize {
        self.max_lookups_in_flight.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure.read().unwrap().as_ref() {
            Some(message) => Err(DomainError::Database(message.clone())),
            None => Ok(()),
        }
    }

    fn matching(&self, predicate: &EntryPredicate) -> Vec<Skin> {
        self.skins
            .read()
            .unwrap()
            .iter()
            .filter(|s| s.skin_type == predicate.skin_type)
            .filter(|s| predicate.moderation.map_or(true, |m| s.moderation == m))
            .cloned()
            .collect()
    }
}

fn window<T>(items: Vec<T>, limit: u64, offset: u64) -> Vec<T> {
    items
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect()
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn count_entries(&self, predicate: &EntryPredicate) -> Result<u64, DomainError> {
        self.enter()?;
        Ok(self.matching(predicate).len() as u64)
    }

    async fn query_entries(
        &self,
        predicate: &EntryPredicate,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<Skin>, DomainError> {
        self.enter()?;
        Ok(window(self.matching(predicate), limit, offset))
    }

    async fn find_by_hash(&self, hash: &SkinHash) -> Result<Option<Skin>, DomainError> {
        self.enter()?;
        let in_flight = self.lookups_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_lookups_in_flight
            .fetch_max(in_flight, Ordering::SeqCst);
        // let other lookups start before this one finishes
        tokio::task::yield_now().await;
        self.lookups_in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.unhydratable.read().unwrap().contains(hash) {
            return Ok(None);
        }
        let skins = self.skins.read().unwrap();
        Ok(skins.iter().find(|s| &s.hash == hash).cloned())
    }

    async fn find_curatorial_page(
        &self,
        policy: &RankingPolicy,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<SkinHash>, DomainError> {
        self.enter()?;
        let classics = self.matching(&EntryPredicate::classic());
        Ok(policy.window(&classics, offset, limit))
    }

    async fn find_reviews(&self, hash: &SkinHash) -> Result<Vec<Review>, DomainError> {
        self.enter()?;
        let reviews = self.reviews.read().unwrap();
        let mut history = reviews.get(hash).cloned().unwrap_or_default();
        history.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(history)
    }

    async fn find_archive_files(&self, hash: &SkinHash) -> Result<Vec<ArchiveFile>, DomainError> {
        self.enter()?;
        let files = self.archive_files.read().unwrap();
        let mut members = files.get(hash).cloned().unwrap_or_default();
        members.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(members)
    }
}
