use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, workshop_type::WorkshopTypeDto},
    server::{
        error::AppError, model::workshop_type::WorkshopType,
        service::workshop_type::WorkshopTypeService, state::AppState,
    },
};

/// Tag for grouping workshop type endpoints in OpenAPI documentation
pub static WORKSHOP_TYPE_TAG: &str = "workshop_type";

/// List all workshop types.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/workshop-types/",
    tag = WORKSHOP_TYPE_TAG,
    responses(
        (status = 200, description = "All workshop types", body = Vec<WorkshopTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_workshop_types(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let types: Vec<WorkshopTypeDto> = WorkshopTypeService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(WorkshopType::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(types)))
}

/// Get a workshop type by id.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/workshop-types/{id}/",
    tag = WORKSHOP_TYPE_TAG,
    params(
        ("id" = i32, Path, description = "Workshop type ID")
    ),
    responses(
        (status = 200, description = "The workshop type", body = WorkshopTypeDto),
        (status = 404, description = "Workshop type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_workshop_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let workshop_type = WorkshopTypeService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(workshop_type.into_dto())))
}
