use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        person::{AdviserDto, SaveAdviserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::person::adviser_params_from_dto,
        service::customer_adviser::CustomerAdviserService,
        state::AppState,
    },
};

pub static ADVISER_TAG: &str = "adviser";

#[utoipa::path(
    get,
    path = "/api/advisers",
    tag = ADVISER_TAG,
    responses(
        (status = 200, description = "All customer advisers", body = Vec<AdviserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_advisers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let advisers = CustomerAdviserService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(advisers.into_iter().map(|a| a.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    post,
    path = "/api/advisers",
    tag = ADVISER_TAG,
    request_body = SaveAdviserDto,
    responses(
        (status = 201, description = "Adviser created", body = AdviserDto),
        (status = 400, description = "Invalid adviser data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_adviser(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveAdviserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let adviser = CustomerAdviserService::new(&state.db)
        .create(adviser_params_from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(adviser.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/advisers/{id}",
    tag = ADVISER_TAG,
    params(("id" = i32, Path, description = "Adviser ID")),
    request_body = SaveAdviserDto,
    responses(
        (status = 200, description = "Adviser updated", body = AdviserDto),
        (status = 400, description = "Invalid adviser data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Adviser not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_adviser(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveAdviserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let adviser = CustomerAdviserService::new(&state.db)
        .update(id, adviser_params_from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(adviser.into_dto())))
}

/// Delete a customer adviser. Locations they advised keep no adviser.
#[utoipa::path(
    delete,
    path = "/api/advisers/{id}",
    tag = ADVISER_TAG,
    params(("id" = i32, Path, description = "Adviser ID")),
    responses(
        (status = 204, description = "Adviser deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin permission required", body = ErrorDto),
        (status = 404, description = "Adviser not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_adviser(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    CustomerAdviserService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
