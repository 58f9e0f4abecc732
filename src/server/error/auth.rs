use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum AuthError {
    /// No bearer token was supplied with the request.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// The bearer token failed signature, expiry or claim validation.
    ///
    /// Results in a 401 Unauthorized response. The reason is logged but not returned.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// The authenticated user lacks the role required for the operation.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - User id of the caller
    /// - Message describing the missing capability
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// The authenticated user is not a member of the team whose statistics were requested.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {user_id} is not a member of team {team_id}")]
    NotTeamMember { user_id: i32, team_id: i32 },
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - For missing or invalid tokens
/// - 403 Forbidden - For missing roles or team membership
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken | Self::InvalidToken(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication credentials were not provided or are invalid."
                        .to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, reason) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto { error: reason }),
            )
                .into_response(),
            Self::NotTeamMember { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You are not added to the team".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
