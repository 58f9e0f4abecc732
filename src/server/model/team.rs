//! Team domain models.

use crate::{
    model::team::TeamDto,
    server::model::user::User,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub creator_id: i32,
}

impl Team {
    /// Converts an entity model to a team domain model at the repository boundary.
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            creator_id: entity.creator_id,
        }
    }
}

/// A team together with its member profiles, ordered by user id.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamWithMembers {
    pub team: Team,
    pub members: Vec<User>,
}

impl TeamWithMembers {
    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.team.id,
            name: self.team.name,
            creator_id: self.team.creator_id,
            members: self
                .members
                .into_iter()
                .map(User::into_summary_dto)
                .collect(),
        }
    }
}
