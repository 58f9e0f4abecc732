//! Workshop type catalog entries.

use crate::model::workshop_type::WorkshopTypeDto;

#[derive(Debug, Clone, PartialEq)]
pub struct WorkshopType {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub duration_days: i32,
    pub description: Option<String>,
}

impl WorkshopType {
    /// Converts an entity model to a workshop type domain model at the repository boundary.
    pub fn from_entity(entity: entity::workshop_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            category: entity.category,
            duration_days: entity.duration_days,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> WorkshopTypeDto {
        WorkshopTypeDto {
            id: self.id,
            name: self.name,
            category: self.category,
            duration_days: self.duration_days,
            description: self.description,
        }
    }
}
