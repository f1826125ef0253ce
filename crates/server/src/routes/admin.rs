use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use models::{accommodation, attendee, event, event_attendance};
use service::accommodation_service::{self, AccommodationInput};
use service::attendance_service::{self, AttendanceInput};
use service::attendee_service::{self, AttendeeInput, AttendeeRow};
use service::event_service::{self, EventInput};
use service::stats_service::{self, Stats};

use crate::errors::ApiError;
use crate::AppState;

/// Body shape for admin updates: the id rides along with the partial fields.
#[derive(Debug, Deserialize)]
pub(crate) struct WithId<T> {
    id: Option<i32>,
    #[serde(flatten)]
    fields: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IdBody {
    id: Option<i32>,
}

fn require_id(id: Option<i32>, entity: &str) -> Result<i32, ApiError> {
    id.ok_or_else(|| ApiError::bad_request(&format!("{} ID is required", entity)))
}

/* ---------- events ---------- */

#[utoipa::path(get, path = "/admin/events", tag = "admin", responses((status = 200, description = "All events ordered by date and start time")))]
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<event::Model>>, ApiError> {
    Ok(Json(event_service::list_events(&state.db).await?))
}

#[utoipa::path(post, path = "/admin/events", tag = "admin", responses((status = 200, description = "Created event")))]
pub async fn create_event(
    State(state): State<AppState>,
    Json(input): Json<EventInput>,
) -> Result<Json<event::Model>, ApiError> {
    Ok(Json(event_service::create_event(&state.db, input).await?))
}

#[utoipa::path(put, path = "/admin/events", tag = "admin", responses((status = 200, description = "Updated event"), (status = 400, description = "Missing id"), (status = 404, description = "Not found")))]
pub async fn update_event(
    State(state): State<AppState>,
    Json(body): Json<WithId<EventInput>>,
) -> Result<Json<event::Model>, ApiError> {
    let id = require_id(body.id, "Event")?;
    Ok(Json(event_service::update_event(&state.db, id, body.fields).await?))
}

#[utoipa::path(delete, path = "/admin/events", tag = "admin", responses((status = 200, description = "Deleted"), (status = 400, description = "Missing id"), (status = 404, description = "Not found")))]
pub async fn delete_event(
    State(state): State<AppState>,
    Json(body): Json<IdBody>,
) -> Result<Json<Value>, ApiError> {
    let id = require_id(body.id, "Event")?;
    event_service::delete_event(&state.db, id).await?;
    Ok(Json(json!({ "message": "Event deleted successfully" })))
}

/* ---------- attendees ---------- */

pub async fn list_attendees(State(state): State<AppState>) -> Result<Json<Vec<AttendeeRow>>, ApiError> {
    Ok(Json(attendee_service::list_attendees(&state.db).await?))
}

pub async fn create_attendee(
    State(state): State<AppState>,
    Json(input): Json<AttendeeInput>,
) -> Result<Json<attendee::Model>, ApiError> {
    Ok(Json(attendee_service::create_attendee(&state.db, input).await?))
}

pub async fn update_attendee(
    State(state): State<AppState>,
    Json(body): Json<WithId<AttendeeInput>>,
) -> Result<Json<attendee::Model>, ApiError> {
    let id = require_id(body.id, "Attendee")?;
    Ok(Json(attendee_service::update_attendee(&state.db, id, body.fields).await?))
}

pub async fn delete_attendee(
    State(state): State<AppState>,
    Json(body): Json<IdBody>,
) -> Result<Json<Value>, ApiError> {
    let id = require_id(body.id, "Attendee")?;
    attendee_service::delete_attendee(&state.db, id).await?;
    Ok(Json(json!({ "message": "Attendee deleted successfully" })))
}

/* ---------- accommodations ---------- */

pub async fn list_accommodations(
    State(state): State<AppState>,
) -> Result<Json<Vec<accommodation::Model>>, ApiError> {
    Ok(Json(accommodation_service::list_accommodations(&state.db).await?))
}

pub async fn create_accommodation(
    State(state): State<AppState>,
    Json(input): Json<AccommodationInput>,
) -> Result<Json<accommodation::Model>, ApiError> {
    Ok(Json(accommodation_service::create_accommodation(&state.db, input).await?))
}

pub async fn update_accommodation(
    State(state): State<AppState>,
    Json(body): Json<WithId<AccommodationInput>>,
) -> Result<Json<accommodation::Model>, ApiError> {
    let id = require_id(body.id, "Accommodation")?;
    Ok(Json(accommodation_service::update_accommodation(&state.db, id, body.fields).await?))
}

pub async fn delete_accommodation(
    State(state): State<AppState>,
    Json(body): Json<IdBody>,
) -> Result<Json<Value>, ApiError> {
    let id = require_id(body.id, "Accommodation")?;
    accommodation_service::delete_accommodation(&state.db, id).await?;
    Ok(Json(json!({ "message": "Accommodation deleted successfully" })))
}

/* ---------- event attendance ---------- */

#[utoipa::path(get, path = "/admin/event-attendance", tag = "admin", responses((status = 200, description = "All attendance links")))]
pub async fn list_attendance(
    State(state): State<AppState>,
) -> Result<Json<Vec<event_attendance::Model>>, ApiError> {
    Ok(Json(attendance_service::list_attendance(&state.db).await?))
}

#[utoipa::path(post, path = "/admin/event-attendance", tag = "admin", request_body = crate::openapi::AttendanceInputDoc, responses((status = 200, description = "Created link"), (status = 400, description = "Missing fields"), (status = 404, description = "Event or attendee not found"), (status = 409, description = "Already registered")))]
pub async fn create_attendance(
    State(state): State<AppState>,
    Json(input): Json<AttendanceInput>,
) -> Result<Json<event_attendance::Model>, ApiError> {
    Ok(Json(attendance_service::create_attendance(&state.db, input).await?))
}

pub async fn update_attendance(
    State(state): State<AppState>,
    Json(body): Json<WithId<AttendanceInput>>,
) -> Result<Json<event_attendance::Model>, ApiError> {
    let id = require_id(body.id, "Attendance record")?;
    Ok(Json(attendance_service::update_attendance(&state.db, id, body.fields).await?))
}

pub async fn delete_attendance(
    State(state): State<AppState>,
    Json(body): Json<IdBody>,
) -> Result<Json<Value>, ApiError> {
    let id = require_id(body.id, "Attendance record")?;
    let deleted = attendance_service::delete_attendance(&state.db, id).await?;
    Ok(Json(json!({
        "message": "Attendance record deleted successfully",
        "deletedRecord": deleted,
    })))
}

/* ---------- stats ---------- */

#[utoipa::path(get, path = "/admin/stats", tag = "admin", responses((status = 200, description = "Dashboard counters")))]
pub async fn stats(State(state): State<AppState>) -> Result<Json<Stats>, ApiError> {
    Ok(Json(stats_service::collect_stats(&state.db).await?))
}
