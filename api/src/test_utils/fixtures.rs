//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use crate::domain::entities::{
    ArchiveFile, EngagementMetric, ModerationOutcome, Review, ReviewId, ReviewRating, Skin,
    SkinHash, SkinType,
};
use crate::domain::ranking::CLASSIC_DEFAULT_HASHES;

/// Deterministic, valid skin hash derived from a number
pub fn skin_hash(n: u32) -> SkinHash {
    format!("{:032x}", n).parse().unwrap()
}

/// Create an unreviewed, untweeted classic skin
pub fn test_skin(n: u32) -> Skin {
    Skin {
        hash: skin_hash(n),
        filename: format!("skin_{}.wsz", n),
        skin_type: SkinType::Classic,
        moderation: ModerationOutcome::Unreviewed,
        engagement: None,
        average_color: Some("#1a2b3c".to_string()),
    }
}

/// Create a classic skin with a given moderation outcome
pub fn test_skin_with_moderation(n: u32, moderation: ModerationOutcome) -> Skin {
    Skin {
        moderation,
        ..test_skin(n)
    }
}

/// Create an approved skin that has been tweeted
pub fn test_tweeted_skin(n: u32, likes: u64, retweets: u64) -> Skin {
    Skin {
        moderation: ModerationOutcome::Approved,
        engagement: Some(EngagementMetric::new(likes, retweets)),
        ..test_skin(n)
    }
}

/// Create a modern skin
pub fn test_modern_skin(n: u32) -> Skin {
    Skin {
        skin_type: SkinType::Modern,
        filename: format!("skin_{}.wal", n),
        ..test_skin(n)
    }
}

/// The classic default skins, approved, in policy order
pub fn classic_default_skins() -> Vec<Skin> {
    CLASSIC_DEFAULT_HASHES
        .iter()
        .enumerate()
        .map(|(i, h)| Skin {
            hash: h.parse().unwrap(),
            filename: format!("base-{}.wsz", i),
            skin_type: SkinType::Classic,
            moderation: ModerationOutcome::Approved,
            engagement: None,
            average_color: None,
        })
        .collect()
}

pub fn test_review(id: i32, hash: &SkinHash, rating: ReviewRating) -> Review {
    Review {
        id: ReviewId(id),
        skin_hash: hash.clone(),
        rating,
        reviewer: None,
    }
}

pub fn test_archive_file(hash: &SkinHash, file_name: &str) -> ArchiveFile {
    ArchiveFile {
        skin_hash: hash.clone(),
        file_name: file_name.to_string(),
        file_md5: "d41d8cd98f00b204e9800998ecf8427e".to_string(),
        file_date: None,
        uncompressed_size: Some(1024),
    }
}
