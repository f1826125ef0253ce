use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::event_attendance;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "event")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: Option<Date>,
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

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Attendance,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Attendance => Entity::has_many(event_attendance::Entity).into(),
        }
    }
}

impl Related<event_attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl Related<crate::attendee::Entity> for Entity {
    fn to() -> RelationDef {
        event_attendance::Relation::Attendee.def()
    }

    fn via() -> Option<RelationDef> {
        Some(event_attendance::Relation::Event.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
