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
        product::{ModuleDto, SaveModuleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::product::SaveModuleParams,
        service::software_module::SoftwareModuleService,
        state::AppState,
    },
};

pub static MODULE_TAG: &str = "module";

#[utoipa::path(
    post,
    path = "/api/modules",
    tag = MODULE_TAG,
    request_body = SaveModuleDto,
    responses(
        (status = 201, description = "Module created", body = ModuleDto),
        (status = 400, description = "Invalid module data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_module(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveModuleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let module = SoftwareModuleService::new(&state.db)
        .create(SaveModuleParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(module.into_dto())))
}

/// Rename a module. The product of a module cannot change.
#[utoipa::path(
    put,
    path = "/api/modules/{id}",
    tag = MODULE_TAG,
    params(("id" = i32, Path, description = "Module ID")),
    request_body = SaveModuleDto,
    responses(
        (status = 200, description = "Module renamed", body = ModuleDto),
        (status = 400, description = "Invalid module name", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_module(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveModuleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = SaveModuleParams::from_dto(payload);
    let module = SoftwareModuleService::new(&state.db)
        .update(id, params.name)
        .await?;

    Ok((StatusCode::OK, Json(module.into_dto())))
}

/// Delete a module with its licenses.
///
/// # Access Control
/// - `Admin` - Only admins can delete modules
#[utoipa::path(
    delete,
    path = "/api/modules/{id}",
    tag = MODULE_TAG,
    params(("id" = i32, Path, description = "Module ID")),
    responses(
        (status = 204, description = "Module deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin permission required", body = ErrorDto),
        (status = 404, description = "Module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_module(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    SoftwareModuleService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
