use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WorkshopTypeDto {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub duration_days: i32,
    pub description: Option<String>,
}
