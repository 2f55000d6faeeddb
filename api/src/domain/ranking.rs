//! Museum ranking
//!
//! The museum order is a total order over classic skins:
//!
//! 1. The classic default skins, in the fixed order of the policy
//! 2. Tweeted skins, most engagement (likes + retweets) first
//! 3. Approved skins that were never tweeted
//! 4. Unreviewed skins
//! 5. Rejected skins
//! 6. NSFW skins
//!
//! Ties always fall back to the content hash, ascending, so the same catalog state
//! always yields the same order and pagination over it is stable.
//!
//! The PostgreSQL adapter pushes this order down into SQL using the same tier ranks;
//! `RankingPolicy::order` is the reference implementation it must agree with.

use std::cmp::Reverse;

use super::entities::{ModerationOutcome, Skin, SkinHash};

/// Content hashes of the skins shipped with the player, in display order
pub const CLASSIC_DEFAULT_HASHES: [&str; 4] = [
    "5e4f10275dcb1fb211d4a8b4f1bda236",
    "cd251187a5e6ff54ce938d26f1f2de02",
    "b0fb83cc20af3abe264291bb17fb2a13",
    "d6010aa35bed659bc1311820daa4b341",
];

/// Position bucket of a skin in the museum order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CuratorialTier {
    ClassicDefault = 0,
    Tweeted = 1,
    Approved = 2,
    Unreviewed = 3,
    Rejected = 4,
    Nsfw = 5,
}

impl CuratorialTier {
    /// Numeric rank, lower sorts first (also used in SQL)
    pub fn rank(self) -> i32 {
        self as i32
    }
}

/// Sort key of one skin; comparing keys compares museum positions
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CuratorialKey {
    tier: CuratorialTier,
    /// Index in the classic default list, zero outside tier 0
    classic_position: usize,
    engagement: Reverse<u64>,
    hash: SkinHash,
}

impl CuratorialKey {
    pub fn tier(&self) -> CuratorialTier {
        self.tier
    }
}

/// Ranking configuration, built once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingPolicy {
    classic_defaults: Vec<SkinHash>,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            classic_defaults: CLASSIC_DEFAULT_HASHES
                .iter()
                .filter_map(|h| h.parse().ok())
                .collect(),
        }
    }
}

impl RankingPolicy {
    pub fn new(classic_defaults: Vec<SkinHash>) -> Self {
        Self { classic_defaults }
    }

    pub fn classic_defaults(&self) -> &[SkinHash] {
        &self.classic_defaults
    }

    fn classic_position(&self, hash: &SkinHash) -> Option<usize> {
        self.classic_defaults.iter().position(|h| h == hash)
    }

    pub fn tier(&self, skin: &Skin) -> CuratorialTier {
        if self.classic_position(&skin.hash).is_some() {
            return CuratorialTier::ClassicDefault;
        }
        if skin.tweeted() {
            return CuratorialTier::Tweeted;
        }
        match skin.moderation {
            ModerationOutcome::Approved => CuratorialTier::Approved,
            ModerationOutcome::Unreviewed => CuratorialTier::Unreviewed,
            ModerationOutcome::Rejected => CuratorialTier::Rejected,
            ModerationOutcome::Nsfw => CuratorialTier::Nsfw,
        }
    }

    pub fn key(&self, skin: &Skin) -> CuratorialKey {
        let tier = self.tier(skin);
        let classic_position = self.classic_position(&skin.hash).unwrap_or(0);
        // engagement only separates tweeted skins
        let engagement = match tier {
            CuratorialTier::Tweeted => skin.engagement.map(|e| e.combined()).unwrap_or(0),
            _ => 0,
        };
        CuratorialKey {
            tier,
            classic_position,
            engagement: Reverse(engagement),
            hash: skin.hash.clone(),
        }
    }

    /// Full museum order of the given skins
    ///
    /// Materializes and sorts every skin passed in. Stores that can order rows
    /// themselves should push the order down and only hydrate one window.
    pub fn order(&self, skins: &[Skin]) -> Vec<SkinHash> {
        let mut keys: Vec<CuratorialKey> = skins.iter().map(|s| self.key(s)).collect();
        keys.sort();
        keys.into_iter().map(|k| k.hash).collect()
    }

    /// The `offset..offset + limit` slice of the museum order
    ///
    /// Windows past the end are empty, never wrapped.
    pub fn window(&self, skins: &[Skin], offset: u64, limit: u64) -> Vec<SkinHash> {
        self.order(skins)
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect()
    }
}
