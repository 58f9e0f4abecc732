//! Domain models for the workshop lifecycle.
//!
//! A workshop is proposed by a coordinator in the pending state and moves to accepted
//! exactly once, when an instructor takes it on. The instructor is unset while pending
//! and set to the accepting user once accepted.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::ActiveEnum;

pub use entity::sea_orm_active_enums::WorkshopStatus;

use crate::{
    model::workshop::{ChangeWorkshopDateDto, ProposeWorkshopDto, WorkshopDto},
    server::model::{user::User, workshop_type::WorkshopType},
};

/// A scheduled workshop as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Workshop {
    pub id: i32,
    pub workshop_type_id: i32,
    /// User who proposed the workshop. Never changes after creation.
    pub coordinator_id: i32,
    /// User who accepted the workshop. `None` while pending.
    pub instructor_id: Option<i32>,
    pub date: NaiveDate,
    pub status: WorkshopStatus,
    pub tnc_accepted: bool,
    pub created_at: DateTime<Utc>,
}

impl Workshop {
    /// Converts an entity model to a workshop domain model at the repository boundary.
    pub fn from_entity(entity: entity::workshop::Model) -> Self {
        Self {
            id: entity.id,
            workshop_type_id: entity.workshop_type_id,
            coordinator_id: entity.coordinator_id,
            instructor_id: entity.instructor_id,
            date: entity.date,
            status: entity.status,
            tnc_accepted: entity.tnc_accepted,
            created_at: entity.created_at,
        }
    }
}

/// A workshop with its workshop type and participants resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkshopDetails {
    pub workshop: Workshop,
    pub workshop_type: WorkshopType,
    pub coordinator: User,
    pub instructor: Option<User>,
}

impl WorkshopDetails {
    pub fn into_dto(self) -> WorkshopDto {
        WorkshopDto {
            id: self.workshop.id,
            workshop_type: self.workshop_type.into_dto(),
            coordinator: self.coordinator.into_summary_dto(),
            instructor: self.instructor.map(User::into_summary_dto),
            date: self.workshop.date,
            status: self.workshop.status.to_value(),
            tnc_accepted: self.workshop.tnc_accepted,
        }
    }
}

/// Parameters for proposing a workshop, as received from the client.
///
/// Values are validated by `WorkshopService::propose` so that authorization is checked
/// before input.
#[derive(Debug, Clone)]
pub struct ProposeWorkshopParam {
    pub workshop_type_id: Option<i32>,
    pub date: Option<String>,
    pub tnc_accepted: bool,
}

impl ProposeWorkshopParam {
    pub fn from_dto(dto: ProposeWorkshopDto) -> Self {
        Self {
            workshop_type_id: dto.workshop_type_id,
            date: dto.date,
            tnc_accepted: dto.tnc_accepted,
        }
    }
}

/// Parameters for moving a workshop to a new date, as received from the client.
#[derive(Debug, Clone)]
pub struct RescheduleWorkshopParam {
    pub workshop_id: i32,
    pub date: Option<String>,
}

impl RescheduleWorkshopParam {
    pub fn from_dto(workshop_id: i32, dto: ChangeWorkshopDateDto) -> Self {
        Self {
            workshop_id,
            date: dto.date,
        }
    }
}

/// Validated values for inserting a new pending workshop.
#[derive(Debug, Clone)]
pub struct CreateWorkshopParam {
    pub workshop_type_id: i32,
    pub coordinator_id: i32,
    pub date: NaiveDate,
}
