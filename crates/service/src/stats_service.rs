use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde::Serialize;

use models::{accommodation, attendee, event};

use crate::errors::ServiceError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub attendee_count: u64,
    pub event_count: u64,
    pub accommodation_count: u64,
}

/// Dashboard counters for the admin landing page.
pub async fn collect_stats(db: &DatabaseConnection) -> Result<Stats, ServiceError> {
    let attendee_count = attendee::Entity::find().count(db).await?;
    let event_count = event::Entity::find().count(db).await?;
    let accommodation_count = accommodation::Entity::find().count(db).await?;
    Ok(Stats { attendee_count, event_count, accommodation_count })
}
