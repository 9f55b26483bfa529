use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One project document. Metadata and issues are embedded as JSON so the
/// table keeps the shape of the dashboard's document collection.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "check_list")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "JsonBinary")]
    pub meta_info: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub issue_list: Json, // array of issue documents, in insertion order
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub permission: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub base_list: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
