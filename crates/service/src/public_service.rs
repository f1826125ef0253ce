use chrono::{Local, NaiveDate};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use serde::Serialize;

use models::{accommodation, attendee, event, event_attendance};

use crate::attendee_service::{self, AttendeeInput};
use crate::errors::ServiceError;

/// Public search returns at most this many attendees.
const SEARCH_LIMIT: u64 = 10;
/// The public landing page shows a short list of what is next.
const UPCOMING_LIMIT: u64 = 6;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeEventView {
    pub event_id: i32,
    pub event_title: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub event_start_time: Option<String>,
    pub event_end_time: Option<String>,
    pub event_location: Option<String>,
    pub status: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeMatch {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub events: Vec<AttendeeEventView>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub attendees: Vec<AttendeeMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeName {
    pub id: i32,
    pub full_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NamesResponse {
    pub names: Vec<AttendeeName>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub country_id: Option<String>,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Events from today onwards, ordered by date then start time.
pub async fn public_events(db: &DatabaseConnection) -> Result<Vec<event::Model>, ServiceError> {
    Ok(event::Entity::find()
        .filter(event::Column::Date.gte(today()))
        .order_by_asc(event::Column::Date)
        .order_by_asc(event::Column::StartTime)
        .all(db)
        .await?)
}

/// The next few events for the landing page.
pub async fn upcoming_events(db: &DatabaseConnection) -> Result<Vec<event::Model>, ServiceError> {
    Ok(event::Entity::find()
        .filter(event::Column::Date.gte(today()))
        .order_by_asc(event::Column::Date)
        .order_by_asc(event::Column::StartTime)
        .limit(UPCOMING_LIMIT)
        .all(db)
        .await?)
}

/// Public accommodation listing, ordered by id.
pub async fn public_accommodations(db: &DatabaseConnection) -> Result<Vec<accommodation::Model>, ServiceError> {
    Ok(accommodation::Entity::find()
        .order_by_asc(accommodation::Column::Id)
        .all(db)
        .await?)
}

/// Attendees staying at the given accommodation.
pub async fn accommodation_residents(db: &DatabaseConnection, accommodation_id: i32) -> Result<Vec<Resident>, ServiceError> {
    let rows = attendee::Entity::find()
        .filter(attendee::Column::AccommodationId.eq(accommodation_id))
        .all(db)
        .await?;
    Ok(rows
        .into_iter()
        .map(|a| Resident { id: a.id, first_name: a.first_name, last_name: a.last_name, country_id: a.country_id })
        .collect())
}

/// All attendee names for autocomplete suggestions.
pub async fn attendee_names(db: &DatabaseConnection) -> Result<NamesResponse, ServiceError> {
    let rows = attendee::Entity::find()
        .order_by_asc(attendee::Column::FirstName)
        .order_by_asc(attendee::Column::LastName)
        .all(db)
        .await?;
    let names = rows
        .into_iter()
        .map(|a| AttendeeName {
            id: a.id,
            full_name: a.full_name(),
            first_name: a.first_name,
            last_name: a.last_name,
        })
        .collect();
    Ok(NamesResponse { names })
}

/// Case-insensitive substring search over first name, last name, or the
/// "first last" concatenation, capped at ten matches, each enriched with the
/// attendee's event registrations.
pub async fn search_attendees(db: &DatabaseConnection, name: Option<&str>) -> Result<SearchResponse, ServiceError> {
    let term = name.unwrap_or("").trim().to_lowercase();
    if term.chars().count() < 2 {
        return Err(ServiceError::Validation("Name must be at least 2 characters".into()));
    }

    let pattern = format!("%{}%", term);
    let matches = attendee::Entity::find()
        .filter(
            Condition::any()
                .add(Expr::expr(Func::lower(Expr::col(attendee::Column::FirstName))).like(pattern.as_str()))
                .add(Expr::expr(Func::lower(Expr::col(attendee::Column::LastName))).like(pattern.as_str()))
                // portable across postgres and sqlite; || is string concat in both
                .add(Expr::cust_with_values("LOWER(first_name || ' ' || last_name) LIKE ?", [pattern.clone()])),
        )
        .limit(SEARCH_LIMIT)
        .all(db)
        .await?;

    let mut attendees = Vec::with_capacity(matches.len());
    for a in matches {
        let registrations = event_attendance::Entity::find()
            .filter(event_attendance::Column::AttendeeId.eq(a.id))
            .find_also_related(event::Entity)
            .all(db)
            .await?;
        let events = registrations
            .into_iter()
            .filter_map(|(link, ev)| {
                ev.map(|e| AttendeeEventView {
                    event_id: e.id,
                    event_title: e.title,
                    event_date: e.date,
                    event_start_time: e.start_time,
                    event_end_time: e.end_time,
                    event_location: e.location,
                    status: link.status,
                })
            })
            .collect();
        attendees.push(AttendeeMatch {
            id: a.id,
            first_name: a.first_name,
            last_name: a.last_name,
            email: a.email,
            events,
        });
    }

    let message = attendees
        .is_empty()
        .then(|| "No attendees found with that name".to_string());
    Ok(SearchResponse { attendees, message })
}

/// Public self-registration: requires both names, rejects duplicate emails,
/// and never self-confirms.
pub async fn register_attendee(db: &DatabaseConnection, mut input: AttendeeInput) -> Result<attendee::Model, ServiceError> {
    let has_first = input.first_name.as_deref().is_some_and(|s| !s.trim().is_empty());
    let has_last = input.last_name.as_deref().is_some_and(|s| !s.trim().is_empty());
    if !has_first || !has_last {
        return Err(ServiceError::Validation("First name and last name are required".into()));
    }

    if let Some(email) = input.email.as_deref().filter(|e| !e.trim().is_empty()) {
        let existing = attendee::Entity::find()
            .filter(attendee::Column::Email.eq(email))
            .one(db)
            .await?;
        if existing.is_some() {
            return Err(ServiceError::Conflict("An attendee with this email already exists".into()));
        }
    }

    input.is_confirmed = Some(false);
    if input.is_adult.is_none() {
        input.is_adult = Some(true);
    }
    attendee_service::create_attendee(db, input).await
}
