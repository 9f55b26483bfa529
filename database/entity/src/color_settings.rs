use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Threshold pair for one dashboard field. Values are percentages (0-100).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "color_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub field_name: String,
    pub high_threshold: f64,
    pub low_threshold: f64,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
