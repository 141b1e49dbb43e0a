//! Migration: Create the clients table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Clients::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // Unique indexes back the service-level duplicate checks
                    .col(ColumnDef::new(Clients::Code).integer().null().unique_key())
                    .col(ColumnDef::new(Clients::Nickname).string().not_null())
                    .col(ColumnDef::new(Clients::CompanyName).string().not_null())
                    .col(
                        ColumnDef::new(Clients::Cnpj)
                            .char_len(14)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Clients::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Clients {
    Table,
    Id,
    Code,
    Nickname,
    CompanyName,
    Cnpj,
}
