//! Create `attendee` table.
//!
//! `accommodation_id` and `partner` are weak references on purpose: deleting
//! an accommodation must not touch attendees, and the partner link was never
//! enforced in the source data.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attendee::Table)
                    .if_not_exists()
                    .col(pk_auto(Attendee::Id))
                    .col(string_null(Attendee::FirstName))
                    .col(string_null(Attendee::LastName))
                    .col(integer_null(Attendee::Partner))
                    .col(string_null(Attendee::Email))
                    .col(string_null(Attendee::Phone))
                    .col(string_null(Attendee::CountryId))
                    .col(boolean_null(Attendee::IsConfirmed))
                    .col(boolean_null(Attendee::IsAdult))
                    .col(integer_null(Attendee::AccommodationId))
                    .col(date_null(Attendee::ArrivalDate))
                    .col(date_null(Attendee::DepartureDate))
                    .col(text_null(Attendee::SpecialRequests))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Attendee::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Attendee {
    Table,
    Id,
    FirstName,
    LastName,
    Partner,
    Email,
    Phone,
    CountryId,
    IsConfirmed,
    IsAdult,
    AccommodationId,
    ArrivalDate,
    DepartureDate,
    SpecialRequests,
}
