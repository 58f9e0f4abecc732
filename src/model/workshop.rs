use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{user::UserSummaryDto, workshop_type::WorkshopTypeDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WorkshopDto {
    pub id: i32,
    pub workshop_type: WorkshopTypeDto,
    pub coordinator: UserSummaryDto,
    pub instructor: Option<UserSummaryDto>,
    pub date: NaiveDate,
    /// 0 = pending, 1 = accepted
    pub status: i32,
    pub tnc_accepted: bool,
}

/// Body of a workshop proposal.
///
/// Fields are optional so missing values surface as validation errors rather than
/// body rejections. Any `status` sent by the client is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ProposeWorkshopDto {
    pub workshop_type_id: Option<i32>,
    pub date: Option<String>,
    #[serde(default)]
    pub tnc_accepted: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ChangeWorkshopDateDto {
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkshopActionDto {
    pub message: String,
    pub workshop: WorkshopDto,
}
