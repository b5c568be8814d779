use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        update::{SetVersionDto, UpdateCountsDto, UpdateOverviewItemDto},
    },
    server::{
        controller::ListParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::update::UpdateService,
        state::AppState,
    },
};

/// Tag for grouping update endpoints in OpenAPI documentation
pub static UPDATE_TAG: &str = "update";

/// Get used products with installed version and latest release, outdated ones first.
#[utoipa::path(
    get,
    path = "/api/updates",
    tag = UPDATE_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Update overview", body = Vec<UpdateOverviewItemDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_updates(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let items = UpdateService::new(&state.db)
        .overview(params.effective_limit(state.config.list_limit))
        .await?;

    Ok((
        StatusCode::OK,
        Json(items.into_iter().map(|i| i.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/updates/counts",
    tag = UPDATE_TAG,
    responses(
        (status = 200, description = "Current and outdated installations", body = UpdateCountsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_update_counts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let counts = UpdateService::new(&state.db).counts().await?;

    Ok((StatusCode::OK, Json(counts.into_dto())))
}

/// Download the archive of a release as `{product}_{version}.zip`.
#[utoipa::path(
    get,
    path = "/api/updates/{id}/download",
    tag = UPDATE_TAG,
    params(("id" = i32, Path, description = "Update ID")),
    responses(
        (status = 200, description = "Update archive", body = Vec<u8>, content_type = "application/zip"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Update not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let download = UpdateService::new(&state.db).download(id).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", download.file_name),
            ),
        ],
        download.content,
    ))
}

/// Delete a release.
///
/// # Access Control
/// - `Admin` - Only admins can delete updates
#[utoipa::path(
    delete,
    path = "/api/updates/{id}",
    tag = UPDATE_TAG,
    params(("id" = i32, Path, description = "Update ID")),
    responses(
        (status = 204, description = "Update deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin permission required", body = ErrorDto),
        (status = 404, description = "Update not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    UpdateService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Set the installed version of a used product by hand.
#[utoipa::path(
    put,
    path = "/api/used-products/{id}/version",
    tag = UPDATE_TAG,
    params(("id" = i32, Path, description = "Used product ID")),
    request_body = SetVersionDto,
    responses(
        (status = 204, description = "Version set"),
        (status = 400, description = "Version too long", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Used product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_used_product_version(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SetVersionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    UpdateService::new(&state.db)
        .set_used_version(id, &payload.version, Utc::now())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
