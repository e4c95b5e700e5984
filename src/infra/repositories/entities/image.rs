//! Image database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Image;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "images")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    pub url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::alcohol::Entity")]
    Alcohol,
}

impl Related<super::alcohol::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alcohol.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Image {
    fn from(model: Model) -> Self {
        Image {
            id: model.id,
            name: model.name,
            url: model.url,
        }
    }
}
