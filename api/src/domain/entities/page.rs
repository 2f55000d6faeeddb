//! Catalog page requests
//!
//! A `PageRequest` is built once per listing call and validated on construction,
//! so an invalid combination of parameters never reaches the store.

use super::{ModerationOutcome, SkinType};
use crate::error::ValidationError;

/// Largest page a single listing call may request
pub const MAX_PAGE_SIZE: u64 = 1000;

/// Page size used when the caller does not ask for one
pub const DEFAULT_PAGE_SIZE: u64 = 100;

/// Requested ordering of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// The curated museum order (classic defaults, tweeted, approved, ...)
    Museum,
}

impl std::str::FromStr for SortMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "museum" => Ok(SortMode::Museum),
            _ => Err(ValidationError::UnknownSortMode(s.to_string())),
        }
    }
}

/// Requested subset of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Only skins whose latest review approved them
    Approved,
}

impl std::str::FromStr for FilterMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "approved" => Ok(FilterMode::Approved),
            _ => Err(ValidationError::UnknownFilterMode(s.to_string())),
        }
    }
}

/// Store-side row predicate shared by listing and counting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryPredicate {
    pub skin_type: SkinType,
    pub moderation: Option<ModerationOutcome>,
}

impl EntryPredicate {
    /// Every classic skin
    pub fn classic() -> Self {
        Self {
            skin_type: SkinType::Classic,
            moderation: None,
        }
    }

    pub fn with_moderation(mut self, outcome: ModerationOutcome) -> Self {
        self.moderation = Some(outcome);
        self
    }
}

impl From<FilterMode> for EntryPredicate {
    fn from(filter: FilterMode) -> Self {
        match filter {
            FilterMode::Approved => {
                EntryPredicate::classic().with_moderation(ModerationOutcome::Approved)
            }
        }
    }
}

/// The one listing mode a request resolves to
///
/// Sorting and filtering are mutually exclusive, so there is no variant carrying both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogQuery {
    /// Classic skins in store order
    Default,
    /// Classic skins in museum order
    Curatorial,
    /// Classic skins matching a filter, in store order
    Filtered(FilterMode),
}

impl CatalogQuery {
    pub fn from_modes(
        sort: Option<SortMode>,
        filter: Option<FilterMode>,
    ) -> Result<Self, ValidationError> {
        match (sort, filter) {
            (None, None) => Ok(CatalogQuery::Default),
            (Some(SortMode::Museum), None) => Ok(CatalogQuery::Curatorial),
            (None, Some(filter)) => Ok(CatalogQuery::Filtered(filter)),
            (Some(_), Some(_)) => Err(ValidationError::UnsupportedCombination),
        }
    }

    /// Predicate used for counting and for non-curatorial listing
    pub fn predicate(&self) -> EntryPredicate {
        match self {
            CatalogQuery::Default | CatalogQuery::Curatorial => EntryPredicate::classic(),
            CatalogQuery::Filtered(filter) => (*filter).into(),
        }
    }
}

/// A validated page of a catalog listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    first: u64,
    offset: u64,
    query: CatalogQuery,
}

impl PageRequest {
    pub fn new(
        first: u64,
        offset: u64,
        sort: Option<SortMode>,
        filter: Option<FilterMode>,
    ) -> Result<Self, ValidationError> {
        if first > MAX_PAGE_SIZE {
            return Err(ValidationError::LimitExceeded {
                requested: first,
                max: MAX_PAGE_SIZE,
            });
        }
        let query = CatalogQuery::from_modes(sort, filter)?;
        Ok(Self {
            first,
            offset,
            query,
        })
    }

    pub fn first(&self) -> u64 {
        self.first
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn query(&self) -> CatalogQuery {
        self.query
    }
}
