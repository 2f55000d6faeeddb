//! Skin domain entity
//!
//! A skin is one distinct archive in the museum, identified by the MD5 digest of
//! its contents. The same archive uploaded under different filenames is one skin.

use serde::Serialize;

use crate::error::ValidationError;

/// Content hash of a skin archive (lowercase MD5 hex digest)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SkinHash(String);

impl SkinHash {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SkinHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SkinHash {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match hex::decode(s) {
            Ok(bytes) if bytes.len() == 16 => Ok(SkinHash(s.to_ascii_lowercase())),
            _ => Err(ValidationError::InvalidHash(s.to_string())),
        }
    }
}

/// Kind of skin archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinType {
    /// Classic (.wsz) skin
    Classic,
    /// Modern (.wal) skin
    Modern,
}

impl SkinType {
    /// Integer code stored in the `skins.skin_type` column
    pub fn code(&self) -> i32 {
        match self {
            SkinType::Classic => 1,
            SkinType::Modern => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(SkinType::Classic),
            2 => Some(SkinType::Modern),
            _ => None,
        }
    }
}

impl std::fmt::Display for SkinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkinType::Classic => write!(f, "classic"),
            SkinType::Modern => write!(f, "modern"),
        }
    }
}

/// Effective moderation state of a skin, taken from its most recent review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationOutcome {
    Unreviewed,
    Approved,
    Rejected,
    Nsfw,
}

impl std::fmt::Display for ModerationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModerationOutcome::Unreviewed => write!(f, "unreviewed"),
            ModerationOutcome::Approved => write!(f, "approved"),
            ModerationOutcome::Rejected => write!(f, "rejected"),
            ModerationOutcome::Nsfw => write!(f, "nsfw"),
        }
    }
}

/// Aggregate tweet engagement for a skin, as of the last refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EngagementMetric {
    pub likes: u64,
    pub retweets: u64,
}

impl EngagementMetric {
    pub fn new(likes: u64, retweets: u64) -> Self {
        Self { likes, retweets }
    }

    /// Ranking weight: likes and retweets count equally
    pub fn combined(&self) -> u64 {
        self.likes.saturating_add(self.retweets)
    }
}

/// A skin in the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skin {
    pub hash: SkinHash,
    pub filename: String,
    pub skin_type: SkinType,
    pub moderation: ModerationOutcome,
    /// `None` until the skin has been tweeted
    pub engagement: Option<EngagementMetric>,
    pub average_color: Option<String>,
}

impl Skin {
    pub fn nsfw(&self) -> bool {
        self.moderation == ModerationOutcome::Nsfw
    }

    pub fn tweeted(&self) -> bool {
        self.engagement.is_some()
    }
}
