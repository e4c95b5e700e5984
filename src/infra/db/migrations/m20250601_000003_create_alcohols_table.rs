//! Migration: Create the alcohols table.
//!
//! References producers (required) and images (optional, one-to-one).

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alcohols::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Alcohols::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Alcohols::Name).string().not_null())
                    .col(ColumnDef::new(Alcohols::Type).string().not_null())
                    .col(ColumnDef::new(Alcohols::Description).string().null())
                    .col(ColumnDef::new(Alcohols::ProducerId).uuid().not_null())
                    .col(ColumnDef::new(Alcohols::Abv).double().not_null())
                    .col(ColumnDef::new(Alcohols::ImageId).uuid().null())
                    .col(
                        ColumnDef::new(Alcohols::DateCreated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alcohols::DateEdited)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alcohols_producer")
                            .from(Alcohols::Table, Alcohols::ProducerId)
                            .to(Producers::Table, Producers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alcohols_image")
                            .from(Alcohols::Table, Alcohols::ImageId)
                            .to(Images::Table, Images::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_alcohols_producer_id")
                    .table(Alcohols::Table)
                    .col(Alcohols::ProducerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_alcohols_type")
                    .table(Alcohols::Table)
                    .col(Alcohols::Type)
                    .to_owned(),
            )
            .await?;

        // One image belongs to at most one alcohol
        manager
            .create_index(
                Index::create()
                    .name("idx_alcohols_image_id")
                    .table(Alcohols::Table)
                    .col(Alcohols::ImageId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alcohols::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Alcohols {
    Table,
    Id,
    Name,
    Type,
    Description,
    ProducerId,
    Abv,
    ImageId,
    DateCreated,
    DateEdited,
}

#[derive(Iden)]
enum Producers {
    Table,
    Id,
}

#[derive(Iden)]
enum Images {
    Table,
    Id,
}
