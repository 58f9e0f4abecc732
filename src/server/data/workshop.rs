//! Workshop data repository for database operations.
//!
//! Provides creation, lookup and the two lifecycle mutations (acceptance and date change)
//! along with the read queries used by the statistics aggregator. Acceptance is a single
//! conditional update so that concurrent accepts on the same workshop cannot both succeed.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{
    stats::{PublicWorkshopFilter, WorkshopSortKey},
    workshop::{CreateWorkshopParam, Workshop, WorkshopStatus},
};

pub struct WorkshopRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkshopRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new pending workshop without an instructor.
    ///
    /// # Arguments
    /// - `param` - Validated workshop type, coordinator and date
    ///
    /// # Returns
    /// - `Ok(Workshop)` - The created workshop
    /// - `Err(DbErr)` - Database error, including foreign key violations
    pub async fn create(&self, param: CreateWorkshopParam) -> Result<Workshop, DbErr> {
        let entity = entity::workshop::ActiveModel {
            workshop_type_id: ActiveValue::Set(param.workshop_type_id),
            coordinator_id: ActiveValue::Set(param.coordinator_id),
            instructor_id: ActiveValue::Set(None),
            date: ActiveValue::Set(param.date),
            status: ActiveValue::Set(WorkshopStatus::Pending),
            tnc_accepted: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Workshop::from_entity(entity))
    }

    /// Finds a workshop by id.
    ///
    /// # Returns
    /// - `Ok(Some(Workshop))` - Workshop found
    /// - `Ok(None)` - No workshop with that id
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Workshop>, DbErr> {
        let entity = entity::prelude::Workshop::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Workshop::from_entity))
    }

    /// Marks a pending workshop as accepted by `instructor_id`.
    ///
    /// Executes `UPDATE ... WHERE id = ? AND status = pending` so the status check and the
    /// transition happen atomically in the store.
    ///
    /// # Returns
    /// - `Ok(true)` - The workshop was pending and is now accepted
    /// - `Ok(false)` - No pending workshop with that id exists
    /// - `Err(DbErr)` - Database error
    pub async fn accept_if_pending(&self, id: i32, instructor_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Workshop::update_many()
            .set(entity::workshop::ActiveModel {
                status: ActiveValue::Set(WorkshopStatus::Accepted),
                instructor_id: ActiveValue::Set(Some(instructor_id)),
                ..Default::default()
            })
            .filter(entity::workshop::Column::Id.eq(id))
            .filter(entity::workshop::Column::Status.eq(WorkshopStatus::Pending))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Moves a workshop to a new date, leaving every other column untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Workshop))` - The updated workshop
    /// - `Ok(None)` - No workshop with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update_date(&self, id: i32, date: NaiveDate) -> Result<Option<Workshop>, DbErr> {
        let Some(entity) = entity::prelude::Workshop::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::workshop::ActiveModel = entity.into();
        active.date = ActiveValue::Set(date);
        let entity = active.update(self.db).await?;

        Ok(Some(Workshop::from_entity(entity)))
    }

    /// Gets every workshop the user coordinates or instructs, newest date first.
    pub async fn get_by_participant(&self, user_id: i32) -> Result<Vec<Workshop>, DbErr> {
        let entities = entity::prelude::Workshop::find()
            .filter(
                Condition::any()
                    .add(entity::workshop::Column::CoordinatorId.eq(user_id))
                    .add(entity::workshop::Column::InstructorId.eq(user_id)),
            )
            .order_by_desc(entity::workshop::Column::Date)
            .order_by_desc(entity::workshop::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Workshop::from_entity).collect())
    }

    /// Gets accepted workshops matching the public statistics filter.
    ///
    /// The date window is inclusive on both ends. Rows with equal sort values are ordered
    /// by id so results are stable.
    pub async fn get_public(&self, filter: &PublicWorkshopFilter) -> Result<Vec<Workshop>, DbErr> {
        use entity::workshop::Column;

        let mut query = entity::prelude::Workshop::find()
            .filter(Column::Status.eq(WorkshopStatus::Accepted))
            .filter(Column::Date.between(filter.from, filter.to));

        if let Some(state) = &filter.state {
            query = query
                .join(
                    JoinType::InnerJoin,
                    entity::workshop::Relation::Coordinator.def(),
                )
                .filter(entity::user::Column::State.eq(state.as_str()));
        }

        if let Some(workshop_type_id) = filter.workshop_type_id {
            query = query.filter(Column::WorkshopTypeId.eq(workshop_type_id));
        }

        let sort_column = match filter.sort.key {
            WorkshopSortKey::Id => Column::Id,
            WorkshopSortKey::Date => Column::Date,
            WorkshopSortKey::Status => Column::Status,
            WorkshopSortKey::WorkshopType => Column::WorkshopTypeId,
            WorkshopSortKey::Coordinator => Column::CoordinatorId,
            WorkshopSortKey::Instructor => Column::InstructorId,
        };

        query = if filter.sort.descending {
            query.order_by_desc(sort_column)
        } else {
            query.order_by_asc(sort_column)
        };

        let entities = query.order_by_asc(Column::Id).all(self.db).await?;

        Ok(entities.into_iter().map(Workshop::from_entity).collect())
    }

    /// Counts workshops per instructor, across all statuses.
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Map of instructor id -> workshop count; instructors without
    ///   workshops are absent
    /// - `Err(DbErr)` - Database error
    pub async fn count_by_instructors(
        &self,
        instructor_ids: &[i32],
    ) -> Result<HashMap<i32, u64>, DbErr> {
        if instructor_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i64)> = entity::prelude::Workshop::find()
            .select_only()
            .column(entity::workshop::Column::InstructorId)
            .column_as(
                Expr::from(Func::count(Expr::col(entity::workshop::Column::Id))),
                "workshop_count",
            )
            .filter(entity::workshop::Column::InstructorId.is_in(instructor_ids.iter().copied()))
            .group_by(entity::workshop::Column::InstructorId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(instructor_id, count)| (instructor_id, count as u64))
            .collect())
    }
}
