use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        stats::{PublicStatsDto, PublicStatsQuery, TeamStatsDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::stats::PublicStatsParam,
        service::stats::StatsService,
        state::AppState,
    },
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Get public statistics of accepted workshops.
///
/// Without both `from_date` and `to_date` the window runs from today over the
/// configured number of days. Results include frequency tables by coordinator state
/// and by workshop type.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Filtered workshops and frequency tables
/// - `400 Bad Request` - Malformed date or unknown sort key
#[utoipa::path(
    get,
    path = "/api/public-workshop-stats/",
    tag = STATS_TAG,
    params(PublicStatsQuery),
    responses(
        (status = 200, description = "Public workshop statistics", body = PublicStatsDto),
        (status = 400, description = "Malformed date or unknown sort key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_public_workshop_stats(
    State(state): State<AppState>,
    Query(query): Query<PublicStatsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let param = PublicStatsParam::from_query(
        query,
        Utc::now().date_naive(),
        state.public_stats_window_days,
    );
    let stats = StatsService::new(&state.db).public_stats(param).await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// Get workshop counts for the members of the first team.
///
/// # Access Control
/// - Members of the team with the lowest id
///
/// # Returns
/// - `200 OK` - Per-member workshop counts and every team's roster
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is not a member of the team
/// - `404 Not Found` - No teams exist
#[utoipa::path(
    get,
    path = "/api/team-stats/",
    tag = STATS_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Team statistics", body = TeamStatsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "You are not added to the team", body = ErrorDto),
        (status = 404, description = "No teams found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    team_stats(state, headers, None).await
}

/// Get workshop counts for the members of a team.
///
/// # Access Control
/// - Members of the team
///
/// # Returns
/// - `200 OK` - Per-member workshop counts and every team's roster
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is not a member of the team
/// - `404 Not Found` - Team does not exist
#[utoipa::path(
    get,
    path = "/api/team-stats/{team_id}/",
    tag = STATS_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Team statistics", body = TeamStatsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "You are not added to the team", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_stats_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    team_stats(state, headers, Some(team_id)).await
}

async fn team_stats(
    state: AppState,
    headers: HeaderMap,
    team_id: Option<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.token_service, &headers)
        .authenticate()
        .await?;

    let stats = StatsService::new(&state.db)
        .team_stats(team_id, &user)
        .await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
