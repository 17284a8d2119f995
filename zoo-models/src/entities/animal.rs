//! `SeaORM` Entity definition for animals

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "animal")]
pub struct Model {
    /// Primary key
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub species: String,
    pub scientific_name: String,
    /// Nulled when the owning category is deleted
    pub category_id: Option<i32>,
    /// Nulled when the owning zone is deleted
    pub zone_id: Option<i32>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub diet: String,
    pub habitat: String,
    #[sea_orm(column_type = "Text")]
    pub fun_facts: String,
    /// Media paths served by external storage
    pub image: Option<String>,
    pub sound: Option<String>,
    pub video: Option<String>,
    pub created_at: Option<DateTimeUtc>,
    /// Mutated only by the detail-view counter
    pub view_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_delete = "SetNull"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::zone::Entity",
        from = "Column::ZoneId",
        to = "super::zone::Column::Id",
        on_delete = "SetNull"
    )]
    Zone,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::zone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Zone.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
