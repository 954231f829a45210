use common::ProjectType;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub project_name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub project_type: ProjectType,

    /// Raw image bytes exactly as uploaded.
    pub image: Vec<u8>,
    pub image_content_type: String,

    /// Bumped on every successful update.
    pub version: i32,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
