//! Migration: Create products table.

use sea_orm::DatabaseBackend;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut name_key = ColumnDef::new(Products::NameKey);
        name_key.string().not_null();
        // Sort keys compare byte-wise; Postgres would otherwise apply the
        // database locale. SQLite's default collation is already binary.
        if manager.get_database_backend() == DatabaseBackend::Postgres {
            name_key.extra("COLLATE \"C\"");
        }

        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Products::Seq)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Products::Id).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Products::Name).string().not_null())
                    .col(&mut name_key)
                    .col(ColumnDef::new(Products::Price).double().not_null())
                    .col(
                        ColumnDef::new(Products::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing orders by (name_key, seq)
        manager
            .create_index(
                Index::create()
                    .name("idx_products_name_key_seq")
                    .table(Products::Table)
                    .col(Products::NameKey)
                    .col(Products::Seq)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_products_name_key_seq")
                    .table(Products::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Products {
    Table,
    Seq,
    Id,
    Name,
    NameKey,
    Price,
    CreatedAt,
}
