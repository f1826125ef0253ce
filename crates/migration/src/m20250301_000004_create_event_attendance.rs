//! Create `event_attendance` table.
//!
//! The link is jointly owned by its endpoints: both foreign keys cascade on
//! delete, so removing an event or attendee removes its links.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventAttendance::Table)
                    .if_not_exists()
                    .col(pk_auto(EventAttendance::Id))
                    .col(integer(EventAttendance::EventId))
                    .col(integer(EventAttendance::AttendeeId))
                    .col(string(EventAttendance::Status))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_attendance_event")
                            .from(EventAttendance::Table, EventAttendance::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_attendance_attendee")
                            .from(EventAttendance::Table, EventAttendance::AttendeeId)
                            .to(Attendee::Table, Attendee::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(EventAttendance::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum EventAttendance { Table, Id, EventId, AttendeeId, Status }

#[derive(DeriveIden)]
enum Event { Table, Id }

#[derive(DeriveIden)]
enum Attendee { Table, Id }
