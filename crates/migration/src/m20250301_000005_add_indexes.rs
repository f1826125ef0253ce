use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // EventAttendance: at most one link per (event, attendee) pair.
        // This constraint is the authoritative Conflict signal; the service
        // pre-checks only produce friendlier messages.
        manager
            .create_index(
                Index::create()
                    .name("uniq_event_attendance_pair")
                    .table(EventAttendance::Table)
                    .col(EventAttendance::EventId)
                    .col(EventAttendance::AttendeeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Attendee: lodging join and duplicate-email lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_attendee_accommodation")
                    .table(Attendee::Table)
                    .col(Attendee::AccommodationId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_attendee_email")
                    .table(Attendee::Table)
                    .col(Attendee::Email)
                    .to_owned(),
            )
            .await?;

        // Event: date-ordered listings and the upcoming filter
        manager
            .create_index(
                Index::create()
                    .name("idx_event_date")
                    .table(Event::Table)
                    .col(Event::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_event_attendance_pair").table(EventAttendance::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_attendee_accommodation").table(Attendee::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_attendee_email").table(Attendee::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_event_date").table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EventAttendance { Table, EventId, AttendeeId }

#[derive(DeriveIden)]
enum Attendee { Table, AccommodationId, Email }

#[derive(DeriveIden)]
enum Event { Table, Date }
