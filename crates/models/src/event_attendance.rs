use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{attendee, event};

/// Many-to-many link between one event and one attendee, carrying the RSVP
/// status. The (event_id, attendee_id) pair is unique at the schema level.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "event_attendance")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: i32,
    pub attendee_id: i32,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Event,
    Attendee,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Event => Entity::belongs_to(event::Entity)
                .from(Column::EventId)
                .to(event::Column::Id)
                .into(),
            Relation::Attendee => Entity::belongs_to(attendee::Entity)
                .from(Column::AttendeeId)
                .to(attendee::Column::Id)
                .into(),
        }
    }
}

impl Related<event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<attendee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
