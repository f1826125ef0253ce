use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::Deserialize;

use models::event;

use crate::errors::ServiceError;

/// Partial event payload shared by create and update. Creation is fully
/// permissive; any field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventInput {
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub max_attendees: Option<i32>,
    pub status: Option<String>,
    pub responsible_person: Option<String>,
    pub contact_details: Option<String>,
    pub website_url: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<String>,
    pub notes: Option<String>,
}

/// All events, ordered by date then start time.
pub async fn list_events(db: &DatabaseConnection) -> Result<Vec<event::Model>, ServiceError> {
    Ok(event::Entity::find()
        .order_by_asc(event::Column::Date)
        .order_by_asc(event::Column::StartTime)
        .all(db)
        .await?)
}

pub async fn get_event(db: &DatabaseConnection, id: i32) -> Result<event::Model, ServiceError> {
    event::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Event"))
}

pub async fn create_event(db: &DatabaseConnection, input: EventInput) -> Result<event::Model, ServiceError> {
    let am = event::ActiveModel {
        date: Set(input.date),
        start_time: Set(input.start_time),
        end_time: Set(input.end_time),
        title: Set(input.title),
        description: Set(input.description),
        location: Set(input.location),
        max_attendees: Set(input.max_attendees),
        status: Set(input.status),
        responsible_person: Set(input.responsible_person),
        contact_details: Set(input.contact_details),
        website_url: Set(input.website_url),
        image_url: Set(input.image_url),
        price: Set(input.price),
        notes: Set(input.notes),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Partial merge: only supplied fields are written.
pub async fn update_event(db: &DatabaseConnection, id: i32, input: EventInput) -> Result<event::Model, ServiceError> {
    let found = event::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Event"))?;
    let mut am: event::ActiveModel = found.clone().into();
    if let Some(v) = input.date {
        am.date = Set(Some(v));
    }
    if let Some(v) = input.start_time {
        am.start_time = Set(Some(v));
    }
    if let Some(v) = input.end_time {
        am.end_time = Set(Some(v));
    }
    if let Some(v) = input.title {
        am.title = Set(Some(v));
    }
    if let Some(v) = input.description {
        am.description = Set(Some(v));
    }
    if let Some(v) = input.location {
        am.location = Set(Some(v));
    }
    if let Some(v) = input.max_attendees {
        am.max_attendees = Set(Some(v));
    }
    if let Some(v) = input.status {
        am.status = Set(Some(v));
    }
    if let Some(v) = input.responsible_person {
        am.responsible_person = Set(Some(v));
    }
    if let Some(v) = input.contact_details {
        am.contact_details = Set(Some(v));
    }
    if let Some(v) = input.website_url {
        am.website_url = Set(Some(v));
    }
    if let Some(v) = input.image_url {
        am.image_url = Set(Some(v));
    }
    if let Some(v) = input.price {
        am.price = Set(Some(v));
    }
    if let Some(v) = input.notes {
        am.notes = Set(Some(v));
    }
    if !am.is_changed() {
        return Ok(found);
    }
    Ok(am.update(db).await?)
}

pub async fn delete_event(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = event::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Event"));
    }
    Ok(())
}
