//! User domain models and parameters.
//!
//! Users are a local projection of the identity provider's accounts, refreshed from
//! token claims whenever the user authenticates.

use crate::model::user::UserSummaryDto;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Region the user's profile belongs to.
    pub state: Option<String>,
    pub institute: Option<String>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            state: entity.state,
            institute: entity.institute,
        }
    }

    /// Full name, falling back to the username when no name is on record.
    pub fn display_name(&self) -> String {
        let full_name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full_name = full_name.trim();

        if full_name.is_empty() {
            self.username.clone()
        } else {
            full_name.to_string()
        }
    }

    pub fn into_summary_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            state: self.state,
        }
    }
}

/// Parameters for refreshing the local user projection from token claims.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub state: Option<String>,
    pub institute: Option<String>,
}
