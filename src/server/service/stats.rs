//! Public and team workshop statistics.
//!
//! Both operations are pure reads over workshops, users and teams.

use std::collections::HashMap;

use chrono::Duration;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{team::TeamRepository, user::UserRepository, workshop::WorkshopRepository},
    error::{auth::AuthError, internal::InternalError, workshop::WorkshopError, AppError},
    model::{
        auth::AuthUser,
        stats::{
            MemberWorkshopCount, PublicStats, PublicStatsParam, PublicWorkshopFilter,
            TeamStats, WorkshopSort,
        },
        team::{Team, TeamWithMembers},
        user::User,
    },
    service::workshop::WorkshopService,
    util::parse::parse_optional_date,
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Aggregates accepted workshops for the public statistics page.
    ///
    /// The explicit window is used only when both dates are supplied; otherwise the
    /// window runs from `today` to `today + window_days`, both ends inclusive. A date
    /// that is present but malformed is rejected even if the other one is missing.
    ///
    /// # Returns
    /// - `Ok(PublicStats)` - Filtered workshops with state and type frequency tables
    /// - `Err(AppError::WorkshopErr)` - Malformed date, workshop type or sort key
    /// - `Err(AppError::InternalErr)` - Default window overflows the calendar
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn public_stats(&self, param: PublicStatsParam) -> Result<PublicStats, AppError> {
        let from = parse_optional_date(param.from_date.as_deref())?;
        let to = parse_optional_date(param.to_date.as_deref())?;

        let (from, to) = match (from, to) {
            (Some(from), Some(to)) => (from, to),
            _ => {
                let to = Duration::try_days(param.window_days)
                    .and_then(|window| param.today.checked_add_signed(window))
                    .ok_or(InternalError::WindowOverflow {
                        from: param.today,
                        days: param.window_days,
                    })?;
                (param.today, to)
            }
        };

        let workshop_type_id = param
            .workshop_type
            .as_deref()
            .map(|value| {
                value
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| WorkshopError::InvalidWorkshopType(value.to_string()))
            })
            .transpose()?;

        let sort = param
            .sort
            .as_deref()
            .map(str::parse::<WorkshopSort>)
            .transpose()?
            .unwrap_or_default();

        let filter = PublicWorkshopFilter {
            from,
            to,
            state: param.state,
            workshop_type_id,
            sort,
        };

        let workshops = WorkshopRepository::new(self.db).get_public(&filter).await?;
        let workshops = WorkshopService::new(self.db).with_details(workshops).await?;

        Ok(PublicStats::from_workshops(workshops))
    }

    /// Counts the workshops each member of a team instructs.
    ///
    /// An omitted `team_id` resolves to the team with the lowest id. Only members of the
    /// resolved team may see its counts.
    ///
    /// # Arguments
    /// - `team_id` - Team to report on, or `None` for the first team
    /// - `actor` - Authenticated user requesting the statistics
    ///
    /// # Returns
    /// - `Ok(TeamStats)` - Per-member counts ordered by user id, plus every team's roster
    /// - `Err(AppError::NotFound)` - Team does not exist, or there are no teams
    /// - `Err(AppError::AuthErr)` - Actor is not a member of the team
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn team_stats(
        &self,
        team_id: Option<i32>,
        actor: &AuthUser,
    ) -> Result<TeamStats, AppError> {
        let team_repo = TeamRepository::new(self.db);

        let team = match team_id {
            Some(id) => team_repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))?,
            None => team_repo
                .find_first()
                .await?
                .ok_or_else(|| AppError::NotFound("No teams found".to_string()))?,
        };

        if !team_repo.is_member(team.id, actor.id).await? {
            return Err(AuthError::NotTeamMember {
                user_id: actor.id,
                team_id: team.id,
            }
            .into());
        }

        let member_ids = team_repo.get_member_ids(team.id).await?;
        let members = self.load_members(team.id, &member_ids).await?;
        let counts = WorkshopRepository::new(self.db)
            .count_by_instructors(&member_ids)
            .await?;

        let member_counts = members
            .iter()
            .map(|member| MemberWorkshopCount {
                user_id: member.id,
                name: member.display_name(),
                workshop_count: counts.get(&member.id).copied().unwrap_or(0),
            })
            .collect();

        let teams = self.team_roster(&team_repo).await?;

        Ok(TeamStats {
            team_id: team.id,
            member_counts,
            teams,
        })
    }

    /// Loads users for the given member ids, preserving their order.
    async fn load_members(&self, team_id: i32, member_ids: &[i32]) -> Result<Vec<User>, AppError> {
        let mut users: HashMap<i32, User> = UserRepository::new(self.db)
            .find_by_ids(member_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        member_ids
            .iter()
            .map(|user_id| {
                users.remove(user_id).ok_or_else(|| {
                    AppError::from(InternalError::MissingTeamMember {
                        team_id,
                        user_id: *user_id,
                    })
                })
            })
            .collect()
    }

    /// Every team with its members, ordered by team id then member id.
    async fn team_roster(
        &self,
        team_repo: &TeamRepository<'_>,
    ) -> Result<Vec<TeamWithMembers>, AppError> {
        let teams: Vec<Team> = team_repo.get_all().await?;
        let memberships = team_repo.get_all_memberships().await?;

        let mut user_ids: Vec<i32> = memberships.iter().map(|(_, user_id)| *user_id).collect();
        user_ids.sort_unstable();
        user_ids.dedup();

        let users: HashMap<i32, User> = UserRepository::new(self.db)
            .find_by_ids(&user_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        let mut members_by_team: HashMap<i32, Vec<User>> = HashMap::new();
        for (team_id, user_id) in memberships {
            let user = users
                .get(&user_id)
                .cloned()
                .ok_or(InternalError::MissingTeamMember { team_id, user_id })?;
            members_by_team.entry(team_id).or_default().push(user);
        }

        Ok(teams
            .into_iter()
            .map(|team| TeamWithMembers {
                members: members_by_team.remove(&team.id).unwrap_or_default(),
                team,
            })
            .collect())
    }
}
