//! Create `accommodation` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accommodation::Table)
                    .if_not_exists()
                    .col(pk_auto(Accommodation::Id))
                    .col(string_null(Accommodation::Name))
                    .col(string_null(Accommodation::Address))
                    .col(integer_null(Accommodation::Capacity))
                    .col(text_null(Accommodation::Notes))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Accommodation::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Accommodation { Table, Id, Name, Address, Capacity, Notes }
