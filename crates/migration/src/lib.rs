//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_event;
mod m20250301_000002_create_accommodation;
mod m20250301_000003_create_attendee;
mod m20250301_000004_create_event_attendance;
mod m20250301_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_event::Migration),
            Box::new(m20250301_000002_create_accommodation::Migration),
            Box::new(m20250301_000003_create_attendee::Migration),
            Box::new(m20250301_000004_create_event_attendance::Migration),
            // Indexes should always be applied last
            Box::new(m20250301_000005_add_indexes::Migration),
        ]
    }
}
