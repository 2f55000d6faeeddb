//! PostgreSQL adapter for CatalogRepository
//!
//! Skins are read through one joined projection: each `skins` row plus its latest
//! review (highest `skin_reviews.id`) and its summed tweet engagement. Listing,
//! counting and museum ordering all share the same joins, so a filter means the
//! same thing whether rows are counted or fetched.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbBackend, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, Statement, Value,
};

use crate::domain::entities::{
    ArchiveFile, EngagementMetric, EntryPredicate, ModerationOutcome, Review, ReviewId,
    ReviewRating, Skin, SkinHash, SkinType,
};
use crate::domain::ports::CatalogRepository;
use crate::domain::ranking::{CuratorialTier, RankingPolicy};
use crate::entity::{archive_files, skin_reviews};
use crate::error::DomainError;

const LATEST_REVIEW_CTE: &str = "latest_review AS (
    SELECT DISTINCT ON (skin_md5) skin_md5, review
    FROM skin_reviews
    ORDER BY skin_md5, id DESC
)";

const ENGAGEMENT_CTE: &str = "engagement AS (
    SELECT skin_md5,
           COALESCE(SUM(likes), 0)::BIGINT AS likes,
           COALESCE(SUM(retweets), 0)::BIGINT AS retweets
    FROM tweets
    GROUP BY skin_md5
)";

const JOINS: &str = "FROM skins
LEFT JOIN latest_review ON latest_review.skin_md5 = skins.md5
LEFT JOIN engagement ON engagement.skin_md5 = skins.md5";

/// One skin with its derived moderation and engagement columns
#[derive(Debug, FromQueryResult)]
struct SkinRow {
    md5: String,
    filename: String,
    skin_type: i32,
    average_color: Option<String>,
    review: Option<String>,
    likes: Option<i64>,
    retweets: Option<i64>,
}

#[derive(Debug, FromQueryResult)]
struct CountRow {
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct HashRow {
    md5: String,
}

/// Accumulates bound values and hands out `$n` placeholders
#[derive(Default)]
struct Binds {
    values: Vec<Value>,
}

impl Binds {
    fn push(&mut self, value: impl Into<Value>) -> String {
        self.values.push(value.into());
        format!("${}", self.values.len())
    }
}

/// WHERE clause for an entry predicate
fn predicate_clause(predicate: &EntryPredicate, binds: &mut Binds) -> String {
    let mut clause = format!(
        "WHERE skins.skin_type = {}",
        binds.push(predicate.skin_type.code())
    );
    match predicate.moderation {
        None => {}
        Some(ModerationOutcome::Unreviewed) => {
            // unrecognised review values count as no review
            let known: Vec<String> = ReviewRating::ALL
                .iter()
                .map(|r| binds.push(r.as_db_str()))
                .collect();
            clause.push_str(&format!(
                " AND (latest_review.review IS NULL OR latest_review.review NOT IN ({}))",
                known.join(", ")
            ));
        }
        Some(outcome) => {
            let rating = match outcome {
                ModerationOutcome::Approved => ReviewRating::Approved,
                ModerationOutcome::Rejected => ReviewRating::Rejected,
                _ => ReviewRating::Nsfw,
            };
            clause.push_str(&format!(
                " AND latest_review.review = {}",
                binds.push(rating.as_db_str())
            ));
        }
    }
    clause
}

/// ORDER BY clause mirroring `RankingPolicy::order`
fn curatorial_order_clause(policy: &RankingPolicy, binds: &mut Binds) -> String {
    let classics: Vec<String> = policy
        .classic_defaults()
        .iter()
        .map(|h| binds.push(h.as_str()))
        .collect();

    let mut tier = String::from("CASE");
    if !classics.is_empty() {
        tier.push_str(&format!(
            " WHEN skins.md5 IN ({}) THEN {}",
            classics.join(", "),
            CuratorialTier::ClassicDefault.rank()
        ));
    }
    tier.push_str(&format!(
        " WHEN engagement.skin_md5 IS NOT NULL THEN {}",
        CuratorialTier::Tweeted.rank()
    ));
    for (rating, rank) in [
        (ReviewRating::Approved, CuratorialTier::Approved),
        (ReviewRating::Rejected, CuratorialTier::Rejected),
        (ReviewRating::Nsfw, CuratorialTier::Nsfw),
    ] {
        tier.push_str(&format!(
            " WHEN latest_review.review = '{}' THEN {}",
            rating.as_db_str(),
            rank.rank()
        ));
    }
    tier.push_str(&format!(
        " ELSE {} END",
        CuratorialTier::Unreviewed.rank()
    ));

    let mut keys = vec![format!("{} ASC", tier)];
    if !classics.is_empty() {
        let whens: String = classics
            .iter()
            .enumerate()
            .map(|(i, p)| format!(" WHEN {} THEN {}", p, i))
            .collect();
        keys.push(format!("CASE skins.md5{} ELSE 0 END ASC", whens));
    }
    keys.push("COALESCE(engagement.likes + engagement.retweets, 0) DESC".to_string());
    keys.push("skins.md5 COLLATE \"C\" ASC".to_string());

    format!("ORDER BY {}", keys.join(", "))
}

fn to_i64(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn statement(sql: String, binds: Binds) -> Statement {
    Statement::from_sql_and_values(DbBackend::Postgres, sql, binds.values)
}

/// PostgreSQL implementation of CatalogRepository
pub struct PostgresCatalogRepository {
    db: DatabaseConnection,
}

impl PostgresCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogRepository for PostgresCatalogRepository {
    async fn count_entries(&self, predicate: &EntryPredicate) -> Result<u64, DomainError> {
        let mut binds = Binds::default();
        let sql = format!(
            "WITH {} SELECT COUNT(*)::BIGINT AS count FROM skins \
             LEFT JOIN latest_review ON latest_review.skin_md5 = skins.md5 {}",
            LATEST_REVIEW_CTE,
            predicate_clause(predicate, &mut binds)
        );

        let row = CountRow::find_by_statement(statement(sql, binds))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(row.map(|r| u64::try_from(r.count).unwrap_or(0)).unwrap_or(0))
    }

    async fn query_entries(
        &self,
        predicate: &EntryPredicate,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<Skin>, DomainError> {
        let mut binds = Binds::default();
        let clause = predicate_clause(predicate, &mut binds);
        let sql = format!(
            "WITH {}, {} SELECT skins.md5, skins.filename, skins.skin_type, skins.average_color, \
             latest_review.review, engagement.likes, engagement.retweets {} {} \
             ORDER BY skins.id ASC LIMIT {} OFFSET {}",
            LATEST_REVIEW_CTE,
            ENGAGEMENT_CTE,
            JOINS,
            clause,
            binds.push(to_i64(limit)),
            binds.push(to_i64(offset))
        );

        let rows = SkinRow::find_by_statement(statement(sql, binds))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        rows.into_iter().map(Skin::try_from).collect()
    }

    async fn find_by_hash(&self, hash: &SkinHash) -> Result<Option<Skin>, DomainError> {
        let mut binds = Binds::default();
        let sql = format!(
            "WITH {}, {} SELECT skins.md5, skins.filename, skins.skin_type, skins.average_color, \
             latest_review.review, engagement.likes, engagement.retweets {} \
             WHERE skins.md5 = {}",
            LATEST_REVIEW_CTE,
            ENGAGEMENT_CTE,
            JOINS,
            binds.push(hash.as_str())
        );

        let row = SkinRow::find_by_statement(statement(sql, binds))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        row.map(Skin::try_from).transpose()
    }

    async fn find_curatorial_page(
        &self,
        policy: &RankingPolicy,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<SkinHash>, DomainError> {
        let mut binds = Binds::default();
        let clause = predicate_clause(&EntryPredicate::classic(), &mut binds);
        let order = curatorial_order_clause(policy, &mut binds);
        let sql = format!(
            "WITH {}, {} SELECT skins.md5 {} {} {} LIMIT {} OFFSET {}",
            LATEST_REVIEW_CTE,
            ENGAGEMENT_CTE,
            JOINS,
            clause,
            order,
            binds.push(to_i64(limit)),
            binds.push(to_i64(offset))
        );

        let rows = HashRow::find_by_statement(statement(sql, binds))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        rows.into_iter()
            .map(|r| {
                r.md5
                    .parse()
                    .map_err(|_| DomainError::Consistency(format!("Malformed skin hash {}", r.md5)))
            })
            .collect()
    }

    async fn find_reviews(&self, hash: &SkinHash) -> Result<Vec<Review>, DomainError> {
        let results = skin_reviews::Entity::find()
            .filter(skin_reviews::Column::SkinMd5.eq(hash.as_str()))
            .order_by_desc(skin_reviews::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results
            .into_iter()
            .map(|m| review_from_model(hash, m))
            .collect()
    }

    async fn find_archive_files(&self, hash: &SkinHash) -> Result<Vec<ArchiveFile>, DomainError> {
        let results = archive_files::Entity::find()
            .filter(archive_files::Column::SkinMd5.eq(hash.as_str()))
            .order_by_asc(archive_files::Column::FileName)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results
            .into_iter()
            .map(|m| ArchiveFile {
                skin_hash: hash.clone(),
                file_name: m.file_name,
                file_md5: m.file_md5,
                file_date: m.file_date.map(|dt| dt.with_timezone(&Utc)),
                uncompressed_size: m.uncompressed_size,
            })
            .collect())
    }
}

fn review_from_model(hash: &SkinHash, model: skin_reviews::Model) -> Result<Review, DomainError> {
    let rating = ReviewRating::from_db_str(&model.review).ok_or_else(|| {
        DomainError::Consistency(format!(
            "Review {} has unknown rating {}",
            model.id, model.review
        ))
    })?;
    Ok(Review {
        id: ReviewId(model.id),
        skin_hash: hash.clone(),
        rating,
        reviewer: model.reviewer,
    })
}

/// Convert a projection row to a domain entity
impl TryFrom<SkinRow> for Skin {
    type Error = DomainError;

    fn try_from(row: SkinRow) -> Result<Self, Self::Error> {
        let hash = row
            .md5
            .parse()
            .map_err(|_| DomainError::Consistency(format!("Malformed skin hash {}", row.md5)))?;
        let skin_type = SkinType::from_code(row.skin_type).ok_or_else(|| {
            DomainError::Consistency(format!(
                "Skin {} has unknown skin_type {}",
                row.md5, row.skin_type
            ))
        })?;
        // tweets exist exactly when the engagement join matched
        let engagement = match (row.likes, row.retweets) {
            (None, None) => None,
            (likes, retweets) => Some(EngagementMetric::new(
                u64::try_from(likes.unwrap_or(0)).unwrap_or(0),
                u64::try_from(retweets.unwrap_or(0)).unwrap_or(0),
            )),
        };
        let latest = row.review.as_deref().and_then(ReviewRating::from_db_str);

        Ok(Skin {
            hash,
            filename: row.filename,
            skin_type,
            moderation: ModerationOutcome::from_latest(latest),
            engagement,
            average_color: row.average_color,
        })
    }
}
