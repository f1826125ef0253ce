use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use models::{accommodation, event, event_attendance};
use service::attendance_service::{self, AttendanceInput, RosterEntry};
use service::attendee_service::AttendeeInput;
use service::event_service;
use service::public_service::{self, NamesResponse, Resident, SearchResponse};
use service::accommodation_service;

use crate::errors::ApiError;
use crate::AppState;

pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<event::Model>>, ApiError> {
    Ok(Json(public_service::public_events(&state.db).await?))
}

pub async fn upcoming_events(State(state): State<AppState>) -> Result<Json<Vec<event::Model>>, ApiError> {
    Ok(Json(public_service::upcoming_events(&state.db).await?))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<event::Model>, ApiError> {
    Ok(Json(event_service::get_event(&state.db, id).await?))
}

pub async fn event_attendees(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<RosterEntry>>, ApiError> {
    Ok(Json(attendance_service::attendees_for_event(&state.db, id).await?))
}

pub async fn list_accommodations(
    State(state): State<AppState>,
) -> Result<Json<Vec<accommodation::Model>>, ApiError> {
    Ok(Json(public_service::public_accommodations(&state.db).await?))
}

pub async fn get_accommodation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<accommodation::Model>, ApiError> {
    Ok(Json(accommodation_service::get_accommodation(&state.db, id).await?))
}

pub async fn accommodation_attendees(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<Resident>>, ApiError> {
    Ok(Json(public_service::accommodation_residents(&state.db, id).await?))
}

pub async fn attendee_names(State(state): State<AppState>) -> Result<Json<NamesResponse>, ApiError> {
    Ok(Json(public_service::attendee_names(&state.db).await?))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    name: Option<String>,
}

#[utoipa::path(get, path = "/attendees/search", tag = "public", params(("name" = String, Query, description = "Partial name, minimum 2 characters")), responses((status = 200, description = "Matches with event registrations"), (status = 400, description = "Term too short")))]
pub async fn search_attendees(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    Ok(Json(public_service::search_attendees(&state.db, query.name.as_deref()).await?))
}

/// Self-RSVP: identical validation to the admin attendance create.
#[utoipa::path(post, path = "/event-attendance", tag = "public", request_body = crate::openapi::AttendanceInputDoc, responses((status = 200, description = "Created link"), (status = 400, description = "Missing fields"), (status = 404, description = "Event or attendee not found"), (status = 409, description = "Already registered")))]
pub async fn rsvp(
    State(state): State<AppState>,
    Json(input): Json<AttendanceInput>,
) -> Result<Json<event_attendance::Model>, ApiError> {
    Ok(Json(attendance_service::create_attendance(&state.db, input).await?))
}

#[utoipa::path(post, path = "/register", tag = "public", request_body = crate::openapi::RegisterInputDoc, responses((status = 200, description = "Created attendee"), (status = 400, description = "Missing name"), (status = 409, description = "Duplicate email")))]
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<AttendeeInput>,
) -> Result<Json<Value>, ApiError> {
    let attendee = public_service::register_attendee(&state.db, input).await?;
    Ok(Json(json!({
        "message": "Registration successful!",
        "attendee": attendee,
    })))
}
