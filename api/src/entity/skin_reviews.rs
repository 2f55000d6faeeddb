//! `skin_reviews` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skin_reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub skin_md5: String,

    /// APPROVED, REJECTED or NSFW
    pub review: String,

    pub reviewer: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
