use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{accommodation, event_attendance};

/// An attendee record. `partner` and `accommodation_id` are weak references:
/// the target row may be gone without invalidating the attendee.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendee")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub partner: Option<i32>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country_id: Option<String>,
    pub is_confirmed: Option<bool>,
    pub is_adult: Option<bool>,
    pub accommodation_id: Option<i32>,
    pub arrival_date: Option<Date>,
    pub departure_date: Option<Date>,
    pub special_requests: Option<String>,
}

impl Model {
    /// Space-joined non-empty name parts, e.g. for autocomplete.
    pub fn full_name(&self) -> String {
        let mut parts = Vec::new();
        if let Some(first) = self.first_name.as_deref() {
            if !first.is_empty() {
                parts.push(first);
            }
        }
        if let Some(last) = self.last_name.as_deref() {
            if !last.is_empty() {
                parts.push(last);
            }
        }
        parts.join(" ")
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Accommodation,
    Attendance,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Accommodation => Entity::belongs_to(accommodation::Entity)
                .from(Column::AccommodationId)
                .to(accommodation::Column::Id)
                .into(),
            Relation::Attendance => Entity::has_many(event_attendance::Entity).into(),
        }
    }
}

impl Related<accommodation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accommodation.def()
    }
}

impl Related<event_attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl Related<crate::event::Entity> for Entity {
    fn to() -> RelationDef {
        event_attendance::Relation::Event.def()
    }

    fn via() -> Option<RelationDef> {
        Some(event_attendance::Relation::Attendee.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
