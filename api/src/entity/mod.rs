//! SeaORM entity models
//!
//! Tables read through the entity API. Skin rows themselves are read with a joined
//! projection (see `adapters::postgres::catalog_repo`), so `skins` has no model here.

pub mod archive_files;
pub mod skin_reviews;
