//! `archive_files` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "archive_files")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub skin_md5: String,

    pub file_name: String,

    pub file_md5: String,

    pub file_date: Option<DateTimeWithTimeZone>,

    pub uncompressed_size: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
