//! Alcohol database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Alcohol, AlcoholType};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "alcohols")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    /// Stored lowercase; `type` is reserved in Rust so the field is `kind`
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub description: Option<String>,
    pub producer_id: Uuid,
    pub abv: f64,
    /// Each image belongs to at most one alcohol
    #[sea_orm(unique)]
    pub image_id: Option<Uuid>,
    pub date_created: DateTimeUtc,
    pub date_edited: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::producer::Entity",
        from = "Column::ProducerId",
        to = "super::producer::Column::Id"
    )]
    Producer,
    #[sea_orm(
        belongs_to = "super::image::Entity",
        from = "Column::ImageId",
        to = "super::image::Column::Id"
    )]
    Image,
}

impl Related<super::producer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Producer.def()
    }
}

impl Related<super::image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Image.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity.
///
/// Fallible: a row with a type string outside the known set means the
/// database was written around the application, and we refuse to guess.
impl TryFrom<Model> for Alcohol {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let kind = AlcoholType::parse(&model.kind).ok_or_else(|| {
            AppError::internal(format!("unknown alcohol type in database: {}", model.kind))
        })?;

        Ok(Alcohol {
            id: model.id,
            name: model.name,
            kind,
            description: model.description,
            producer_id: model.producer_id,
            abv: model.abv,
            image_id: model.image_id,
            date_created: model.date_created,
            date_edited: model.date_edited,
        })
    }
}
