use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        workshop::{ChangeWorkshopDateDto, ProposeWorkshopDto, WorkshopActionDto, WorkshopDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::workshop::{ProposeWorkshopParam, RescheduleWorkshopParam, WorkshopDetails},
        service::workshop::WorkshopService,
        state::AppState,
    },
};

/// Tag for grouping workshop endpoints in OpenAPI documentation
pub static WORKSHOP_TAG: &str = "workshop";

/// Propose a new workshop.
///
/// Creates a pending workshop coordinated by the caller. Any status supplied by the
/// client is ignored.
///
/// # Access Control
/// - `Coordinator` - Only coordinators can propose workshops
///
/// # Returns
/// - `201 Created` - The proposed workshop
/// - `400 Bad Request` - Terms not accepted, missing or invalid date, missing type
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is not a coordinator
/// - `404 Not Found` - Workshop type does not exist
#[utoipa::path(
    post,
    path = "/api/workshops/",
    tag = WORKSHOP_TAG,
    request_body = ProposeWorkshopDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Workshop proposed", body = WorkshopDto),
        (status = 400, description = "Invalid proposal", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a coordinator", body = ErrorDto),
        (status = 404, description = "Workshop type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn propose_workshop(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ProposeWorkshopDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.token_service, &headers)
        .authenticate()
        .await?;

    let param = ProposeWorkshopParam::from_dto(payload);
    let workshop = WorkshopService::new(&state.db).propose(&user, param).await?;

    Ok((StatusCode::CREATED, Json(workshop.into_dto())))
}

/// Get a workshop by id.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/workshops/{id}/",
    tag = WORKSHOP_TAG,
    params(
        ("id" = i32, Path, description = "Workshop ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The workshop", body = WorkshopDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Workshop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_workshop(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.token_service, &headers)
        .authenticate()
        .await?;

    let workshop = WorkshopService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(workshop.into_dto())))
}

/// Accept a pending workshop.
///
/// Makes the caller the workshop's instructor. Only one instructor can ever accept a
/// given workshop.
///
/// # Access Control
/// - `Instructor` - Only instructors can accept workshops
///
/// # Returns
/// - `200 OK` - Confirmation message with the accepted workshop
/// - `400 Bad Request` - Workshop is not pending
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is not an instructor
/// - `404 Not Found` - Workshop does not exist
#[utoipa::path(
    post,
    path = "/api/workshops/{id}/accept/",
    tag = WORKSHOP_TAG,
    params(
        ("id" = i32, Path, description = "Workshop ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Workshop accepted", body = WorkshopActionDto),
        (status = 400, description = "Workshop is not pending", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an instructor", body = ErrorDto),
        (status = 404, description = "Workshop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_workshop(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.token_service, &headers)
        .authenticate()
        .await?;

    let workshop = WorkshopService::new(&state.db).accept(id, &user).await?;

    Ok((
        StatusCode::OK,
        Json(action_dto("Workshop accepted successfully", workshop)),
    ))
}

/// Change the date of a workshop.
///
/// The workshop keeps its status; an accepted workshop stays accepted.
///
/// # Access Control
/// - `Instructor` - Only instructors can change workshop dates
///
/// # Returns
/// - `200 OK` - Confirmation message with the updated workshop
/// - `400 Bad Request` - Missing or invalid date
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is not an instructor
/// - `404 Not Found` - Workshop does not exist
#[utoipa::path(
    post,
    path = "/api/workshops/{id}/change-date/",
    tag = WORKSHOP_TAG,
    params(
        ("id" = i32, Path, description = "Workshop ID")
    ),
    request_body = ChangeWorkshopDateDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Workshop date changed", body = WorkshopActionDto),
        (status = 400, description = "Missing or invalid date", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an instructor", body = ErrorDto),
        (status = 404, description = "Workshop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_workshop_date(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<ChangeWorkshopDateDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.token_service, &headers)
        .authenticate()
        .await?;

    let param = RescheduleWorkshopParam::from_dto(id, payload);
    let workshop = WorkshopService::new(&state.db)
        .reschedule(&user, param)
        .await?;

    Ok((
        StatusCode::OK,
        Json(action_dto("Workshop date changed successfully", workshop)),
    ))
}

/// List the caller's workshops.
///
/// Returns every workshop the caller coordinates or instructs, newest date first.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/my-workshops/",
    tag = WORKSHOP_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's workshops", body = Vec<WorkshopDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_workshops(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.token_service, &headers)
        .authenticate()
        .await?;

    let workshops: Vec<WorkshopDto> = WorkshopService::new(&state.db)
        .list_for_user(user.id)
        .await?
        .into_iter()
        .map(WorkshopDetails::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(workshops)))
}

fn action_dto(message: &str, workshop: WorkshopDetails) -> WorkshopActionDto {
    WorkshopActionDto {
        message: message.to_string(),
        workshop: workshop.into_dto(),
    }
}
