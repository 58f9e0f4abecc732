//! Domain models for public and team workshop statistics.

use std::{collections::BTreeMap, str::FromStr};

use chrono::NaiveDate;

use crate::{
    model::stats::{MemberWorkshopCountDto, PublicStatsDto, PublicStatsQuery, TeamStatsDto},
    server::{
        error::workshop::WorkshopError,
        model::{team::TeamWithMembers, workshop::WorkshopDetails},
    },
};

/// Workshop attributes public statistics can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkshopSortKey {
    Id,
    Date,
    Status,
    WorkshopType,
    Coordinator,
    Instructor,
}

/// Ordering for public statistics, parsed from `date`, `-date`, `workshop_type`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkshopSort {
    pub key: WorkshopSortKey,
    pub descending: bool,
}

impl Default for WorkshopSort {
    fn default() -> Self {
        Self {
            key: WorkshopSortKey::Date,
            descending: false,
        }
    }
}

impl FromStr for WorkshopSort {
    type Err = WorkshopError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (descending, name) = match value.strip_prefix('-') {
            Some(name) => (true, name),
            None => (false, value),
        };

        let key = match name {
            "id" => WorkshopSortKey::Id,
            "date" => WorkshopSortKey::Date,
            "status" => WorkshopSortKey::Status,
            "workshop_type" | "workshop_type_id" => WorkshopSortKey::WorkshopType,
            "coordinator" | "coordinator_id" => WorkshopSortKey::Coordinator,
            "instructor" | "instructor_id" => WorkshopSortKey::Instructor,
            _ => return Err(WorkshopError::InvalidSortKey(value.to_string())),
        };

        Ok(Self { key, descending })
    }
}

/// Raw public statistics request plus the request's notion of today.
#[derive(Debug, Clone)]
pub struct PublicStatsParam {
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub state: Option<String>,
    /// Raw workshop type id, validated by the service.
    pub workshop_type: Option<String>,
    pub sort: Option<String>,
    pub today: NaiveDate,
    pub window_days: i64,
}

impl PublicStatsParam {
    pub fn from_query(query: PublicStatsQuery, today: NaiveDate, window_days: i64) -> Self {
        Self {
            from_date: query.from_date,
            to_date: query.to_date,
            state: query.state.filter(|state| !state.trim().is_empty()),
            workshop_type: query
                .workshop_type
                .filter(|workshop_type| !workshop_type.trim().is_empty()),
            sort: query.sort.filter(|sort| !sort.trim().is_empty()),
            today,
            window_days,
        }
    }
}

/// Resolved filter applied to accepted workshops by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicWorkshopFilter {
    /// Inclusive lower bound.
    pub from: NaiveDate,
    /// Inclusive upper bound.
    pub to: NaiveDate,
    pub state: Option<String>,
    pub workshop_type_id: Option<i32>,
    pub sort: WorkshopSort,
}

/// Label used for workshops whose coordinator has no region on record.
pub const UNKNOWN_STATE: &str = "Unknown";

#[derive(Debug, Clone)]
pub struct PublicStats {
    pub workshops: Vec<WorkshopDetails>,
    pub counts_by_state: BTreeMap<String, u64>,
    pub counts_by_type: BTreeMap<String, u64>,
}

impl PublicStats {
    /// Tallies workshops by coordinator region and by workshop type name.
    pub fn from_workshops(workshops: Vec<WorkshopDetails>) -> Self {
        let mut counts_by_state = BTreeMap::new();
        let mut counts_by_type = BTreeMap::new();

        for details in &workshops {
            let state = details
                .coordinator
                .state
                .clone()
                .unwrap_or_else(|| UNKNOWN_STATE.to_string());
            *counts_by_state.entry(state).or_insert(0) += 1;
            *counts_by_type
                .entry(details.workshop_type.name.clone())
                .or_insert(0) += 1;
        }

        Self {
            workshops,
            counts_by_state,
            counts_by_type,
        }
    }

    pub fn into_dto(self) -> PublicStatsDto {
        PublicStatsDto {
            workshops: self
                .workshops
                .into_iter()
                .map(WorkshopDetails::into_dto)
                .collect(),
            counts_by_state: self.counts_by_state,
            counts_by_type: self.counts_by_type,
        }
    }
}

/// Number of workshops a team member is instructor of, across all statuses.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberWorkshopCount {
    pub user_id: i32,
    pub name: String,
    pub workshop_count: u64,
}

#[derive(Debug, Clone)]
pub struct TeamStats {
    /// The team the counts belong to, after resolving an omitted id.
    pub team_id: i32,
    pub member_counts: Vec<MemberWorkshopCount>,
    /// Every team with its members.
    pub teams: Vec<TeamWithMembers>,
}

impl TeamStats {
    pub fn into_dto(self) -> TeamStatsDto {
        TeamStatsDto {
            team_id: self.team_id,
            member_counts: self
                .member_counts
                .into_iter()
                .map(|count| MemberWorkshopCountDto {
                    user_id: count.user_id,
                    name: count.name,
                    workshop_count: count.workshop_count,
                })
                .collect(),
            teams: self
                .teams
                .into_iter()
                .map(TeamWithMembers::into_dto)
                .collect(),
        }
    }
}
