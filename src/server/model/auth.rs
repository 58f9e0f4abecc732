//! Authenticated caller and role capabilities.
//!
//! Roles are resolved once from the token's group claim when a request is authenticated
//! and then passed explicitly to every service operation that needs an actor.

use std::collections::HashSet;

use crate::server::error::auth::AuthError;

/// Closed set of roles recognised by the workshop lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Proposes workshops.
    Coordinator,
    /// Accepts and reschedules workshops.
    Instructor,
    /// Holds every capability.
    Admin,
}

impl Role {
    /// Maps an identity provider group name to a role.
    ///
    /// Matching is case-insensitive; groups with no meaning to this service yield `None`.
    pub fn from_group(group: &str) -> Option<Self> {
        match group.trim().to_ascii_lowercase().as_str() {
            "coordinator" => Some(Self::Coordinator),
            "instructor" => Some(Self::Instructor),
            "admin" | "administrator" => Some(Self::Admin),
            _ => None,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Coordinator => "coordinator",
            Self::Instructor => "instructor",
            Self::Admin => "admin",
        }
    }
}

/// The authenticated user acting on a request.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub id: i32,
    pub username: String,
    pub roles: HashSet<Role>,
}

impl AuthUser {
    /// Builds an authenticated user, keeping only the groups that map to known roles.
    pub fn new<'a>(
        id: i32,
        username: impl Into<String>,
        groups: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            roles: groups.into_iter().filter_map(Role::from_group).collect(),
        }
    }

    /// Returns whether the user holds `role`. Admins hold every role.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role) || self.roles.contains(&Role::Admin)
    }

    /// Fails with `AuthError::AccessDenied` unless the user holds `role`.
    pub fn require_role(&self, role: Role, action: &str) -> Result<(), AuthError> {
        if self.has_role(role) {
            return Ok(());
        }

        let article = match role {
            Role::Admin => "an",
            _ => "a",
        };

        Err(AuthError::AccessDenied(
            self.id,
            format!(
                "Only users with {} {} role can {}.",
                article,
                role.describe(),
                action
            ),
        ))
    }
}
