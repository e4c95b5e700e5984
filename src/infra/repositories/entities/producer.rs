//! Producer database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Producer;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "producers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    pub country: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::alcohol::Entity")]
    Alcohols,
}

impl Related<super::alcohol::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alcohols.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Producer {
    fn from(model: Model) -> Self {
        Producer {
            id: model.id,
            name: model.name,
            country: model.country,
        }
    }
}
