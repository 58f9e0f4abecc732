//! Workshop lifecycle operations.
//!
//! Coordinators propose workshops, instructors accept or reschedule them. A workshop
//! moves from pending to accepted exactly once; acceptance is a conditional update in
//! the store so two racing instructors cannot both succeed.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        user::UserRepository, workshop::WorkshopRepository,
        workshop_type::WorkshopTypeRepository,
    },
    error::{internal::InternalError, workshop::WorkshopError, AppError},
    model::{
        auth::{AuthUser, Role},
        workshop::{
            CreateWorkshopParam, ProposeWorkshopParam, RescheduleWorkshopParam, Workshop,
            WorkshopDetails,
        },
    },
    util::parse::parse_required_date,
};

pub struct WorkshopService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkshopService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Proposes a new workshop on behalf of a coordinator.
    ///
    /// Checks run in order: coordinator role, terms accepted, date present and valid,
    /// workshop type present, workshop type exists. The new workshop is always pending
    /// with no instructor.
    ///
    /// # Arguments
    /// - `actor` - Authenticated user proposing the workshop
    /// - `param` - Raw proposal values
    ///
    /// # Returns
    /// - `Ok(WorkshopDetails)` - The created workshop with its relations
    /// - `Err(AppError::AuthErr)` - Actor is not a coordinator
    /// - `Err(AppError::WorkshopErr)` - Invalid proposal
    /// - `Err(AppError::NotFound)` - Workshop type does not exist
    pub async fn propose(
        &self,
        actor: &AuthUser,
        param: ProposeWorkshopParam,
    ) -> Result<WorkshopDetails, AppError> {
        actor.require_role(Role::Coordinator, "propose workshops")?;

        if !param.tnc_accepted {
            return Err(WorkshopError::TncNotAccepted.into());
        }

        let date = parse_required_date(param.date.as_deref())?;

        let workshop_type_id = param
            .workshop_type_id
            .ok_or(WorkshopError::WorkshopTypeRequired)?;

        if !WorkshopTypeRepository::new(self.db)
            .exists(workshop_type_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Workshop type {} not found",
                workshop_type_id
            )));
        }

        let workshop = WorkshopRepository::new(self.db)
            .create(CreateWorkshopParam {
                workshop_type_id,
                coordinator_id: actor.id,
                date,
            })
            .await?;

        tracing::info!(
            "User {} ({}) proposed workshop {} of type {} on {}",
            actor.username,
            actor.id,
            workshop.id,
            workshop_type_id,
            date
        );

        self.with_details_one(workshop).await
    }

    /// Accepts a pending workshop, making the actor its instructor.
    ///
    /// # Returns
    /// - `Ok(WorkshopDetails)` - The accepted workshop
    /// - `Err(AppError::AuthErr)` - Actor is not an instructor
    /// - `Err(AppError::NotFound)` - No workshop with that id
    /// - `Err(AppError::WorkshopErr)` - Workshop was already accepted
    pub async fn accept(
        &self,
        workshop_id: i32,
        actor: &AuthUser,
    ) -> Result<WorkshopDetails, AppError> {
        actor.require_role(Role::Instructor, "accept workshops")?;

        let repo = WorkshopRepository::new(self.db);

        let Some(workshop) = repo.find_by_id(workshop_id).await? else {
            return Err(not_found(workshop_id));
        };

        if !repo.accept_if_pending(workshop.id, actor.id).await? {
            // Lost a race or was never pending; re-read to tell the two apart.
            return match repo.find_by_id(workshop_id).await? {
                Some(_) => {
                    tracing::debug!(
                        "User {} tried to accept workshop {} which is not pending",
                        actor.id,
                        workshop_id
                    );
                    Err(WorkshopError::NotPending(workshop_id).into())
                }
                None => Err(not_found(workshop_id)),
            };
        }

        tracing::info!(
            "User {} ({}) accepted workshop {}",
            actor.username,
            actor.id,
            workshop_id
        );

        let workshop = repo
            .find_by_id(workshop_id)
            .await?
            .ok_or_else(|| not_found(workshop_id))?;

        self.with_details_one(workshop).await
    }

    /// Moves a workshop to a new date without touching its status.
    ///
    /// # Returns
    /// - `Ok(WorkshopDetails)` - The rescheduled workshop
    /// - `Err(AppError::AuthErr)` - Actor is not an instructor
    /// - `Err(AppError::NotFound)` - No workshop with that id
    /// - `Err(AppError::WorkshopErr)` - Date missing or invalid
    pub async fn reschedule(
        &self,
        actor: &AuthUser,
        param: RescheduleWorkshopParam,
    ) -> Result<WorkshopDetails, AppError> {
        actor.require_role(Role::Instructor, "change workshop dates")?;

        let repo = WorkshopRepository::new(self.db);

        if repo.find_by_id(param.workshop_id).await?.is_none() {
            return Err(not_found(param.workshop_id));
        }

        let date = parse_required_date(param.date.as_deref())?;

        let workshop = repo
            .update_date(param.workshop_id, date)
            .await?
            .ok_or_else(|| not_found(param.workshop_id))?;

        tracing::info!(
            "User {} ({}) moved workshop {} to {}",
            actor.username,
            actor.id,
            workshop.id,
            date
        );

        self.with_details_one(workshop).await
    }

    /// Lists workshops the user coordinates or instructs, newest date first.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<WorkshopDetails>, AppError> {
        let workshops = WorkshopRepository::new(self.db)
            .get_by_participant(user_id)
            .await?;

        self.with_details(workshops).await
    }

    /// Gets a single workshop by id.
    pub async fn get(&self, workshop_id: i32) -> Result<WorkshopDetails, AppError> {
        let workshop = WorkshopRepository::new(self.db)
            .find_by_id(workshop_id)
            .await?
            .ok_or_else(|| not_found(workshop_id))?;

        self.with_details_one(workshop).await
    }

    /// Loads the workshop type, coordinator and instructor of each workshop.
    ///
    /// Relations are fetched in two batched queries regardless of the number of workshops.
    /// Order of the input is preserved.
    ///
    /// # Returns
    /// - `Ok(Vec<WorkshopDetails>)` - One entry per input workshop
    /// - `Err(AppError::InternalErr)` - A workshop references a missing row
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn with_details(
        &self,
        workshops: Vec<Workshop>,
    ) -> Result<Vec<WorkshopDetails>, AppError> {
        let mut type_ids: Vec<i32> = workshops.iter().map(|w| w.workshop_type_id).collect();
        type_ids.sort_unstable();
        type_ids.dedup();

        let mut user_ids: Vec<i32> = workshops
            .iter()
            .flat_map(|w| std::iter::once(w.coordinator_id).chain(w.instructor_id))
            .collect();
        user_ids.sort_unstable();
        user_ids.dedup();

        let types: HashMap<i32, _> = WorkshopTypeRepository::new(self.db)
            .find_by_ids(&type_ids)
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();
        let users: HashMap<i32, _> = UserRepository::new(self.db)
            .find_by_ids(&user_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        workshops
            .into_iter()
            .map(|workshop| {
                let workshop_id = workshop.id;
                let missing = |relation: &'static str, id: i32| {
                    InternalError::MissingWorkshopRelation {
                        workshop_id,
                        relation,
                        id,
                    }
                };

                let workshop_type = types
                    .get(&workshop.workshop_type_id)
                    .cloned()
                    .ok_or_else(|| missing("workshop type", workshop.workshop_type_id))?;
                let coordinator = users
                    .get(&workshop.coordinator_id)
                    .cloned()
                    .ok_or_else(|| missing("coordinator", workshop.coordinator_id))?;
                let instructor = match workshop.instructor_id {
                    Some(id) => Some(
                        users
                            .get(&id)
                            .cloned()
                            .ok_or_else(|| missing("instructor", id))?,
                    ),
                    None => None,
                };

                Ok::<_, AppError>(WorkshopDetails {
                    workshop,
                    workshop_type,
                    coordinator,
                    instructor,
                })
            })
            .collect()
    }

    async fn with_details_one(&self, workshop: Workshop) -> Result<WorkshopDetails, AppError> {
        let id = workshop.id;

        self.with_details(vec![workshop])
            .await?
            .pop()
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(workshop_id: i32) -> AppError {
    AppError::NotFound(format!("Workshop {} not found", workshop_id))
}
