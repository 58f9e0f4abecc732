use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{team::TeamDto, workshop::WorkshopDto};

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PublicStatsQuery {
    /// Start of the date window (ISO-8601), used only together with `to_date`
    pub from_date: Option<String>,
    /// End of the date window (ISO-8601), used only together with `from_date`
    pub to_date: Option<String>,
    /// Coordinator region to filter by
    pub state: Option<String>,
    /// Workshop type id to filter by
    pub workshop_type: Option<String>,
    /// Sort key, optionally prefixed with `-` for descending order (default: `date`)
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicStatsDto {
    pub workshops: Vec<WorkshopDto>,
    pub counts_by_state: BTreeMap<String, u64>,
    pub counts_by_type: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MemberWorkshopCountDto {
    pub user_id: i32,
    pub name: String,
    pub workshop_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamStatsDto {
    pub team_id: i32,
    pub member_counts: Vec<MemberWorkshopCountDto>,
    pub teams: Vec<TeamDto>,
}
