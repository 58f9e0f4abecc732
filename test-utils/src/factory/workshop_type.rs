//! Workshop type factory for creating test catalog entries.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test workshop types with customizable fields.
pub struct WorkshopTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    category: String,
    duration_days: i32,
    description: Option<String>,
}

impl<'a> WorkshopTypeFactory<'a> {
    /// Creates a new WorkshopTypeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Workshop Type {id}"`
    /// - category: `"General"`
    /// - duration_days: `1`
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Workshop Type {}", id),
            category: "General".to_string(),
            duration_days: 1,
            description: None,
        }
    }

    /// Sets the workshop type name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the workshop type category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the workshop duration in days.
    pub fn duration_days(mut self, duration_days: i32) -> Self {
        self.duration_days = duration_days;
        self
    }

    /// Builds and inserts the workshop type entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::workshop_type::Model)` - Created workshop type entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::workshop_type::Model, DbErr> {
        entity::workshop_type::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            category: ActiveValue::Set(self.category),
            duration_days: ActiveValue::Set(self.duration_days),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a workshop type with default values.
pub async fn create_workshop_type(
    db: &DatabaseConnection,
) -> Result<entity::workshop_type::Model, DbErr> {
    WorkshopTypeFactory::new(db).build().await
}
