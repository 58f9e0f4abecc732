use sea_orm::DatabaseConnection;

use crate::server::{
    data::workshop_type::WorkshopTypeRepository, error::AppError,
    model::workshop_type::WorkshopType,
};

pub struct WorkshopTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkshopTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every workshop type ordered by name.
    pub async fn get_all(&self) -> Result<Vec<WorkshopType>, AppError> {
        Ok(WorkshopTypeRepository::new(self.db).get_all().await?)
    }

    /// Gets a workshop type by id.
    pub async fn get(&self, id: i32) -> Result<WorkshopType, AppError> {
        WorkshopTypeRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Workshop type {} not found", id)))
    }
}
