use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
    SqlErr,
};
use serde::{Deserialize, Serialize};

use models::{attendee, event, event_attendance};

use crate::errors::ServiceError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttendanceInput {
    pub event_id: Option<i32>,
    pub attendee_id: Option<i32>,
    pub status: Option<String>,
}

/// One roster line for an event: attendee identity plus RSVP status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country_id: Option<String>,
    pub status: String,
}

/// All attendance links, ungrouped; consumers derive their own views.
pub async fn list_attendance(db: &DatabaseConnection) -> Result<Vec<event_attendance::Model>, ServiceError> {
    Ok(event_attendance::Entity::find().all(db).await?)
}

/// Register an attendee for an event.
///
/// The checks run as individual statements, not one transaction; the unique
/// (event_id, attendee_id) index is what actually closes the duplicate race,
/// the pre-checks exist for friendlier messages.
pub async fn create_attendance(
    db: &DatabaseConnection,
    input: AttendanceInput,
) -> Result<event_attendance::Model, ServiceError> {
    // An id of 0 is present; only a missing field fails validation.
    let status = input.status.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let (Some(event_id), Some(attendee_id), Some(status)) = (input.event_id, input.attendee_id, status) else {
        return Err(ServiceError::Validation("Missing required fields".into()));
    };

    if event::Entity::find_by_id(event_id).one(db).await?.is_none() {
        return Err(ServiceError::not_found("Event"));
    }
    if attendee::Entity::find_by_id(attendee_id).one(db).await?.is_none() {
        return Err(ServiceError::not_found("Attendee"));
    }

    let existing = event_attendance::Entity::find()
        .filter(event_attendance::Column::EventId.eq(event_id))
        .filter(event_attendance::Column::AttendeeId.eq(attendee_id))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(duplicate_registration());
    }

    let am = event_attendance::ActiveModel {
        event_id: Set(event_id),
        attendee_id: Set(attendee_id),
        status: Set(status.to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(conflict_or_db)
}

/// Partial merge; typically used to change the status only. Moving the link
/// onto an already-linked pair surfaces as a Conflict.
pub async fn update_attendance(
    db: &DatabaseConnection,
    id: i32,
    input: AttendanceInput,
) -> Result<event_attendance::Model, ServiceError> {
    let found = event_attendance::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Attendance record"))?;
    let mut am: event_attendance::ActiveModel = found.clone().into();
    if let Some(v) = input.event_id {
        am.event_id = Set(v);
    }
    if let Some(v) = input.attendee_id {
        am.attendee_id = Set(v);
    }
    if let Some(v) = input.status {
        am.status = Set(v);
    }
    if !am.is_changed() {
        return Ok(found);
    }
    am.update(db).await.map_err(conflict_or_db)
}

/// Remove a link, returning the deleted record for confirmation.
pub async fn delete_attendance(db: &DatabaseConnection, id: i32) -> Result<event_attendance::Model, ServiceError> {
    let found = event_attendance::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Attendance record"))?;
    let record = found.clone();
    found.delete(db).await?;
    Ok(record)
}

/// Everyone registered for the given event, with RSVP status.
pub async fn attendees_for_event(db: &DatabaseConnection, event_id: i32) -> Result<Vec<RosterEntry>, ServiceError> {
    let rows = event_attendance::Entity::find()
        .filter(event_attendance::Column::EventId.eq(event_id))
        .find_also_related(attendee::Entity)
        .all(db)
        .await?;
    Ok(rows
        .into_iter()
        .filter_map(|(link, at)| {
            at.map(|a| RosterEntry {
                id: a.id,
                first_name: a.first_name,
                last_name: a.last_name,
                country_id: a.country_id,
                status: link.status,
            })
        })
        .collect())
}

fn duplicate_registration() -> ServiceError {
    ServiceError::Conflict("Already registered for this event".into())
}

fn conflict_or_db(err: sea_orm::DbErr) -> ServiceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => duplicate_registration(),
        _ => ServiceError::Db(err),
    }
}
