//! Replacement license exchange with client installations.
//!
//! An agent first asks whether its key has a started replacement, installs the new
//! key and then confirms the switch so the old license ends.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};
use chrono::Utc;

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        license::{LicenseCheckDto, LicenseCheckForm, LicenseConfirmForm},
    },
    server::{
        error::AppError, model::license::ConfirmReplacementParams,
        service::license_heartbeat::LicenseHeartbeatService, state::AppState,
    },
};

pub static LICENSE_HEARTBEAT_TAG: &str = "license-heartbeat";

#[utoipa::path(
    post,
    path = "/licenses/license-heartbeat",
    tag = LICENSE_HEARTBEAT_TAG,
    request_body(content = LicenseCheckForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Replacement key if one has started", body = LicenseCheckDto),
        (status = 404, description = "License not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_license(
    State(state): State<AppState>,
    Form(form): Form<LicenseCheckForm>,
) -> Result<impl IntoResponse, AppError> {
    let check = LicenseHeartbeatService::new(&state.db)
        .check(&form.key, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(check.into_dto())))
}

#[utoipa::path(
    post,
    path = "/licenses/license-heartbeat/save",
    tag = LICENSE_HEARTBEAT_TAG,
    request_body(content = LicenseConfirmForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Switch confirmed", body = StatusDto),
        (status = 400, description = "New key is not the replacement of the old key", body = ErrorDto),
        (status = 404, description = "License not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_license(
    State(state): State<AppState>,
    Form(form): Form<LicenseConfirmForm>,
) -> Result<impl IntoResponse, AppError> {
    let status = LicenseHeartbeatService::new(&state.db)
        .confirm(
            ConfirmReplacementParams {
                old_key: form.old,
                new_key: form.new,
                new_exists: form.new_exists,
            },
            Utc::now(),
        )
        .await?;

    Ok((StatusCode::OK, Json(StatusDto { status })))
}
