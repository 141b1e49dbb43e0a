//! Migration: Create the contracts table.
//!
//! client_id and service_id are carried without foreign key constraints;
//! referential existence is not enforced at the storage layer.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contracts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contracts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Contracts::ContractCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Contracts::ClientId).integer().not_null())
                    .col(ColumnDef::new(Contracts::ServiceId).integer().not_null())
                    .col(ColumnDef::new(Contracts::Quantity).integer().not_null())
                    .col(ColumnDef::new(Contracts::UnitPrice).double().not_null())
                    .col(ColumnDef::new(Contracts::StartDate).date().not_null())
                    .col(ColumnDef::new(Contracts::EndDate).date().null())
                    .col(ColumnDef::new(Contracts::Status).string().not_null())
                    .col(ColumnDef::new(Contracts::Observation).text().null())
                    .to_owned(),
            )
            .await?;

        // Contract lookups by client are a first-class query path
        manager
            .create_index(
                Index::create()
                    .name("idx_contracts_client_id")
                    .table(Contracts::Table)
                    .col(Contracts::ClientId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_contracts_client_id")
                    .table(Contracts::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Contracts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Contracts {
    Table,
    Id,
    ContractCode,
    ClientId,
    ServiceId,
    Quantity,
    UnitPrice,
    StartDate,
    EndDate,
    Status,
    Observation,
}
