use chrono::NaiveDate;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A row referenced by a workshop is missing.
    ///
    /// Foreign keys guarantee these rows exist, so this indicates a corrupted store.
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Workshop {workshop_id} references missing {relation} {id}")]
    MissingWorkshopRelation {
        /// The workshop holding the dangling reference
        workshop_id: i32,
        /// Which reference is dangling
        relation: &'static str,
        /// The referenced id
        id: i32,
    },

    /// A team membership references a user that is missing.
    #[error("Team {team_id} references missing user {user_id}")]
    MissingTeamMember { team_id: i32, user_id: i32 },

    /// The default public statistics window runs past the last representable date.
    #[error("Public statistics window of {days} days from {from} overflows the calendar")]
    WindowOverflow { from: NaiveDate, days: i64 },
}
