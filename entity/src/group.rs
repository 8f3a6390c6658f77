use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub location: String,
    pub chronic: String,
    pub master: Uuid, // creating user, always the first player
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::group_player::Relation::User.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::group_player::Relation::Group.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
