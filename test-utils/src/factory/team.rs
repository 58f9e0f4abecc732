//! Team factory for creating test teams and memberships.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams with an initial member list.
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    creator_id: i32,
    member_ids: Vec<i32>,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Team {id}"`
    /// - members: none
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entities
    /// - `creator_id` - User who created the team
    pub fn new(db: &'a DatabaseConnection, creator_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Team {}", id),
            creator_id,
            member_ids: Vec::new(),
        }
    }

    /// Sets the team name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a member to the team.
    pub fn member(mut self, user_id: i32) -> Self {
        self.member_ids.push(user_id);
        self
    }

    /// Builds and inserts the team and its memberships.
    ///
    /// # Returns
    /// - `Ok(entity::team::Model)` - Created team entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        let team = entity::team::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            creator_id: ActiveValue::Set(self.creator_id),
        }
        .insert(self.db)
        .await?;

        for user_id in self.member_ids {
            entity::team_member::ActiveModel {
                team_id: ActiveValue::Set(team.id),
                user_id: ActiveValue::Set(user_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(team)
    }
}

/// Creates a team with the given members.
///
/// # Arguments
/// - `db` - Database connection
/// - `creator_id` - User who created the team
/// - `member_ids` - Users to add as members
pub async fn create_team(
    db: &DatabaseConnection,
    creator_id: i32,
    member_ids: &[i32],
) -> Result<entity::team::Model, DbErr> {
    member_ids
        .iter()
        .fold(TeamFactory::new(db, creator_id), |factory, id| {
            factory.member(*id)
        })
        .build()
        .await
}
