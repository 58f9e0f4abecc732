//! Workshop type catalog repository.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::workshop_type::WorkshopType;

pub struct WorkshopTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkshopTypeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all workshop types ordered by name.
    pub async fn get_all(&self) -> Result<Vec<WorkshopType>, DbErr> {
        let entities = entity::prelude::WorkshopType::find()
            .order_by_asc(entity::workshop_type::Column::Name)
            .order_by_asc(entity::workshop_type::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(WorkshopType::from_entity).collect())
    }

    /// Finds a workshop type by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<WorkshopType>, DbErr> {
        let entity = entity::prelude::WorkshopType::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(WorkshopType::from_entity))
    }

    /// Checks whether a workshop type exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Finds all workshop types with the given ids, ordered by id.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<WorkshopType>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::WorkshopType::find()
            .filter(entity::workshop_type::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::workshop_type::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(WorkshopType::from_entity).collect())
    }
}
