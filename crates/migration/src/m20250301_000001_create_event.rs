//! Create `event` table.
//!
//! Root entity; attendance links reference it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(date_null(Event::Date))
                    .col(string_null(Event::StartTime))
                    .col(string_null(Event::EndTime))
                    .col(string_null(Event::Title))
                    .col(text_null(Event::Description))
                    .col(string_null(Event::Location))
                    .col(integer_null(Event::MaxAttendees))
                    .col(string_null(Event::Status))
                    .col(string_null(Event::ResponsiblePerson))
                    .col(string_null(Event::ContactDetails))
                    .col(string_null(Event::WebsiteUrl))
                    .col(string_null(Event::ImageUrl))
                    .col(string_null(Event::Price))
                    .col(text_null(Event::Notes))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Event::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Event {
    Table,
    Id,
    Date,
    StartTime,
    EndTime,
    Title,
    Description,
    Location,
    MaxAttendees,
    Status,
    ResponsiblePerson,
    ContactDetails,
    WebsiteUrl,
    ImageUrl,
    Price,
    Notes,
}
