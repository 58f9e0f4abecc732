use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejected workshop input or lifecycle transition.
///
/// Every variant maps to 400 Bad Request. `NotPending` is the conflict case: the request
/// was well formed but the workshop has already left the pending state.
#[derive(Error, Debug, PartialEq)]
pub enum WorkshopError {
    /// Proposal submitted without accepting the workshop type's terms and conditions.
    #[error("Terms and conditions must be accepted")]
    TncNotAccepted,

    /// Proposal submitted without a workshop type.
    #[error("Workshop type is required")]
    WorkshopTypeRequired,

    /// Proposal or reschedule submitted without a date.
    #[error("Date is required")]
    DateRequired,

    /// Date is not an ISO-8601 calendar date.
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Public statistics requested with a sort key that is not a workshop attribute.
    #[error("Invalid workshop type '{0}', expected a numeric id")]
    InvalidWorkshopType(String),

    #[error("Invalid sort key '{0}'")]
    InvalidSortKey(String),

    /// Accept attempted on a workshop that is no longer pending.
    #[error("Workshop is not pending")]
    NotPending(i32),
}

impl IntoResponse for WorkshopError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
