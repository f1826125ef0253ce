use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use models::{accommodation, attendee};

use crate::errors::ServiceError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttendeeInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub partner: Option<i32>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country_id: Option<String>,
    pub is_confirmed: Option<bool>,
    pub is_adult: Option<bool>,
    pub accommodation_id: Option<i32>,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
    pub special_requests: Option<String>,
}

/// Attendee plus the joined lodging name; `accommodationName` is null when no
/// accommodation is assigned or the referenced row no longer exists.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeRow {
    #[serde(flatten)]
    pub attendee: attendee::Model,
    pub accommodation_name: Option<String>,
}

/// All attendees with accommodation names, ordered by last then first name.
pub async fn list_attendees(db: &DatabaseConnection) -> Result<Vec<AttendeeRow>, ServiceError> {
    let rows = attendee::Entity::find()
        .find_also_related(accommodation::Entity)
        .order_by_asc(attendee::Column::LastName)
        .order_by_asc(attendee::Column::FirstName)
        .all(db)
        .await?;
    Ok(rows
        .into_iter()
        .map(|(a, acc)| AttendeeRow { accommodation_name: acc.and_then(|m| m.name), attendee: a })
        .collect())
}

pub async fn get_attendee(db: &DatabaseConnection, id: i32) -> Result<attendee::Model, ServiceError> {
    attendee::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Attendee"))
}

pub async fn create_attendee(db: &DatabaseConnection, input: AttendeeInput) -> Result<attendee::Model, ServiceError> {
    let am = attendee::ActiveModel {
        first_name: Set(input.first_name),
        last_name: Set(input.last_name),
        partner: Set(input.partner),
        email: Set(input.email),
        phone: Set(input.phone),
        country_id: Set(input.country_id),
        is_confirmed: Set(input.is_confirmed),
        is_adult: Set(input.is_adult),
        accommodation_id: Set(input.accommodation_id),
        arrival_date: Set(input.arrival_date),
        departure_date: Set(input.departure_date),
        special_requests: Set(input.special_requests),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Partial merge: only supplied fields are written.
pub async fn update_attendee(db: &DatabaseConnection, id: i32, input: AttendeeInput) -> Result<attendee::Model, ServiceError> {
    let found = attendee::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Attendee"))?;
    let mut am: attendee::ActiveModel = found.clone().into();
    if let Some(v) = input.first_name {
        am.first_name = Set(Some(v));
    }
    if let Some(v) = input.last_name {
        am.last_name = Set(Some(v));
    }
    if let Some(v) = input.partner {
        am.partner = Set(Some(v));
    }
    if let Some(v) = input.email {
        am.email = Set(Some(v));
    }
    if let Some(v) = input.phone {
        am.phone = Set(Some(v));
    }
    if let Some(v) = input.country_id {
        am.country_id = Set(Some(v));
    }
    if let Some(v) = input.is_confirmed {
        am.is_confirmed = Set(Some(v));
    }
    if let Some(v) = input.is_adult {
        am.is_adult = Set(Some(v));
    }
    if let Some(v) = input.accommodation_id {
        am.accommodation_id = Set(Some(v));
    }
    if let Some(v) = input.arrival_date {
        am.arrival_date = Set(Some(v));
    }
    if let Some(v) = input.departure_date {
        am.departure_date = Set(Some(v));
    }
    if let Some(v) = input.special_requests {
        am.special_requests = Set(Some(v));
    }
    if !am.is_changed() {
        return Ok(found);
    }
    Ok(am.update(db).await?)
}

pub async fn delete_attendee(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = attendee::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Attendee"));
    }
    Ok(())
}
