//! Workshop factory for creating test workshop entities.
//!
//! Workshops default to the pending state without an instructor. Use `accepted_by`
//! to create an accepted workshop that honors the instructor invariant.

use chrono::{Duration, NaiveDate, Utc};
use entity::sea_orm_active_enums::WorkshopStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test workshops with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::workshop::WorkshopFactory;
///
/// let workshop = WorkshopFactory::new(&db, workshop_type.id, coordinator.id)
///     .date(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap())
///     .accepted_by(instructor.id)
///     .build()
///     .await?;
/// ```
pub struct WorkshopFactory<'a> {
    db: &'a DatabaseConnection,
    workshop_type_id: i32,
    coordinator_id: i32,
    instructor_id: Option<i32>,
    date: NaiveDate,
    status: WorkshopStatus,
    tnc_accepted: bool,
}

impl<'a> WorkshopFactory<'a> {
    /// Creates a new WorkshopFactory with default values.
    ///
    /// Defaults:
    /// - date: 7 days from today
    /// - status: `Pending`
    /// - instructor_id: `None`
    /// - tnc_accepted: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `workshop_type_id` - Workshop type this workshop is an instance of
    /// - `coordinator_id` - User who proposed the workshop
    pub fn new(db: &'a DatabaseConnection, workshop_type_id: i32, coordinator_id: i32) -> Self {
        Self {
            db,
            workshop_type_id,
            coordinator_id,
            instructor_id: None,
            date: Utc::now().date_naive() + Duration::days(7),
            status: WorkshopStatus::Pending,
            tnc_accepted: true,
        }
    }

    /// Sets the workshop date.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Marks the workshop as accepted by the given instructor.
    pub fn accepted_by(mut self, instructor_id: i32) -> Self {
        self.status = WorkshopStatus::Accepted;
        self.instructor_id = Some(instructor_id);
        self
    }

    /// Builds and inserts the workshop entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::workshop::Model)` - Created workshop entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::workshop::Model, DbErr> {
        entity::workshop::ActiveModel {
            id: ActiveValue::NotSet,
            workshop_type_id: ActiveValue::Set(self.workshop_type_id),
            coordinator_id: ActiveValue::Set(self.coordinator_id),
            instructor_id: ActiveValue::Set(self.instructor_id),
            date: ActiveValue::Set(self.date),
            status: ActiveValue::Set(self.status),
            tnc_accepted: ActiveValue::Set(self.tnc_accepted),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending workshop with default values.
///
/// Shorthand for `WorkshopFactory::new(db, workshop_type_id, coordinator_id).build().await`.
pub async fn create_workshop(
    db: &DatabaseConnection,
    workshop_type_id: i32,
    coordinator_id: i32,
) -> Result<entity::workshop::Model, DbErr> {
    WorkshopFactory::new(db, workshop_type_id, coordinator_id)
        .build()
        .await
}
