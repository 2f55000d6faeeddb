//! Review domain entity
//!
//! A moderation judgment on a skin. A skin can be reviewed many times; the most
//! recent review decides its effective moderation outcome.

use serde::Serialize;

use super::{ModerationOutcome, SkinHash};

/// Unique identifier for a review (store row id, increasing with recency)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ReviewId(pub i32);

impl std::fmt::Display for ReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rating given by a reviewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewRating {
    Approved,
    Rejected,
    Nsfw,
}

impl ReviewRating {
    /// Every rating, in the order the column values are listed
    pub const ALL: [ReviewRating; 3] = [
        ReviewRating::Approved,
        ReviewRating::Rejected,
        ReviewRating::Nsfw,
    ];

    /// Value stored in the `skin_reviews.review` column
    pub fn as_db_str(&self) -> &'static str {
        match self {
            ReviewRating::Approved => "APPROVED",
            ReviewRating::Rejected => "REJECTED",
            ReviewRating::Nsfw => "NSFW",
        }
    }

    /// Rating for a stored column value; matching is exact, so any other spelling
    /// is not a rating
    pub fn from_db_str(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_db_str() == value)
    }
}

impl std::fmt::Display for ReviewRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewRating::Approved => write!(f, "approved"),
            ReviewRating::Rejected => write!(f, "rejected"),
            ReviewRating::Nsfw => write!(f, "nsfw"),
        }
    }
}

impl From<ReviewRating> for ModerationOutcome {
    fn from(rating: ReviewRating) -> Self {
        match rating {
            ReviewRating::Approved => ModerationOutcome::Approved,
            ReviewRating::Rejected => ModerationOutcome::Rejected,
            ReviewRating::Nsfw => ModerationOutcome::Nsfw,
        }
    }
}

impl ModerationOutcome {
    /// Outcome implied by the latest review, if any
    pub fn from_latest(latest: Option<ReviewRating>) -> Self {
        latest.map(Into::into).unwrap_or(ModerationOutcome::Unreviewed)
    }
}

/// A moderation review of a skin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub id: ReviewId,
    pub skin_hash: SkinHash,
    pub rating: ReviewRating,
    /// Historical reviews predate reviewer tracking
    pub reviewer: Option<String>,
}
