use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "advertisement")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "String(StringLen::N(150))")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    /// Assigned once on insert, never updated.
    pub published_at: DateTimeUtc,

    /// Immutable after creation; no update path exists for it.
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub owner: String,
}

impl ActiveModelBehavior for ActiveModel {}
