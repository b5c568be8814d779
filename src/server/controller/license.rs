use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        license::{LicenseCountsDto, LicenseDto, LicenseListItemDto, SaveLicenseDto},
    },
    server::{
        controller::ListParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::license::SaveLicenseParams,
        service::license::LicenseService,
        state::AppState,
    },
};

/// Tag for grouping license endpoints in OpenAPI documentation
pub static LICENSE_TAG: &str = "license";

/// Get licenses ordered by end date with their validity status.
///
/// Customer licenses show "Für alle gültig" as location name.
///
/// # Returns
/// - `200 OK` - Up to `limit` licenses (default from configuration, `all=true` for every license)
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/licenses",
    tag = LICENSE_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "License overview", body = Vec<LicenseListItemDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_licenses(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let licenses = LicenseService::new(&state.db)
        .list(
            params.effective_limit(state.config.list_limit),
            state.windows().license_expiry,
            Utc::now(),
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(licenses.into_iter().map(|l| l.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/licenses/counts",
    tag = LICENSE_TAG,
    responses(
        (status = 200, description = "Number of licenses per status", body = LicenseCountsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_license_counts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let counts = LicenseService::new(&state.db)
        .counts(state.windows().license_expiry, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(counts.into_dto())))
}

/// Create a license for a customer or a single location.
///
/// # Returns
/// - `201 Created` - Created license
/// - `400 Bad Request` - Invalid owner, dates, key or replacement
/// - `401 Unauthorized` - Not logged in
/// - `409 Conflict` - License key already taken
#[utoipa::path(
    post,
    path = "/api/licenses",
    tag = LICENSE_TAG,
    request_body = SaveLicenseDto,
    responses(
        (status = 201, description = "License created", body = LicenseDto),
        (status = 400, description = "Invalid license data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "License key already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_license(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveLicenseDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let license = LicenseService::new(&state.db)
        .create(SaveLicenseParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(license.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/licenses/{id}",
    tag = LICENSE_TAG,
    params(("id" = i32, Path, description = "License ID")),
    responses(
        (status = 200, description = "License", body = LicenseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "License not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_license(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let license = LicenseService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(license.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/licenses/{id}",
    tag = LICENSE_TAG,
    params(("id" = i32, Path, description = "License ID")),
    request_body = SaveLicenseDto,
    responses(
        (status = 200, description = "License updated", body = LicenseDto),
        (status = 400, description = "Invalid license data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "License not found", body = ErrorDto),
        (status = 409, description = "License key already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_license(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveLicenseDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let license = LicenseService::new(&state.db)
        .update(id, SaveLicenseParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::OK, Json(license.into_dto())))
}

/// Delete a license.
///
/// Used products no other license covers are removed with it.
///
/// # Access Control
/// - `Admin` - Only admins can delete licenses
#[utoipa::path(
    delete,
    path = "/api/licenses/{id}",
    tag = LICENSE_TAG,
    params(("id" = i32, Path, description = "License ID")),
    responses(
        (status = 204, description = "License deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin permission required", body = ErrorDto),
        (status = 404, description = "License not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_license(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    LicenseService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
