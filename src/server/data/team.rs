//! Team data repository.
//!
//! Teams are maintained by an external collaborator; this repository only reads them.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::team::Team;

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a team by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Finds the team with the lowest id, used when no team is specified.
    pub async fn find_first(&self) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Gets all teams ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Team>, DbErr> {
        let entities = entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    /// Checks whether a user is a member of a team.
    pub async fn is_member(&self, team_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let membership = entity::prelude::TeamMember::find_by_id((team_id, user_id))
            .one(self.db)
            .await?;

        Ok(membership.is_some())
    }

    /// Gets the member user ids of a team, ordered by user id.
    pub async fn get_member_ids(&self, team_id: i32) -> Result<Vec<i32>, DbErr> {
        let memberships = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .order_by_asc(entity::team_member::Column::UserId)
            .all(self.db)
            .await?;

        Ok(memberships.into_iter().map(|m| m.user_id).collect())
    }

    /// Gets every membership as `(team_id, user_id)` pairs, ordered by team then user.
    pub async fn get_all_memberships(&self) -> Result<Vec<(i32, i32)>, DbErr> {
        let memberships = entity::prelude::TeamMember::find()
            .order_by_asc(entity::team_member::Column::TeamId)
            .order_by_asc(entity::team_member::Column::UserId)
            .all(self.db)
            .await?;

        Ok(memberships
            .into_iter()
            .map(|m| (m.team_id, m.user_id))
            .collect())
    }
}
