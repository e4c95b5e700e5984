//! Migration: Create the producers table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Producers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Producers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Producers::Name).string().not_null())
                    .col(ColumnDef::new(Producers::Country).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Producers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Producers {
    Table,
    Id,
    Name,
    Country,
}
