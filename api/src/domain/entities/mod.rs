//! Domain entities
//!
//! Pure domain models representing the catalog.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod archive_file;
pub mod page;
pub mod review;
pub mod skin;

pub use archive_file::ArchiveFile;
pub use page::{
    CatalogQuery, EntryPredicate, FilterMode, PageRequest, SortMode, DEFAULT_PAGE_SIZE,
    MAX_PAGE_SIZE,
};
pub use review::{Review, ReviewId, ReviewRating};
pub use skin::{EngagementMetric, ModerationOutcome, Skin, SkinHash, SkinType};
