use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        user::{ChangePasswordDto, UpdateProfileDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{ChangePasswordParams, UpdateProfileParams},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping settings endpoints in OpenAPI documentation
pub static SETTINGS_TAG: &str = "settings";

/// Update the logged-in user's profile.
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Missing or overlong field
/// - `401 Unauthorized` - Not logged in
/// - `409 Conflict` - Username already taken
#[utoipa::path(
    put,
    path = "/api/settings/profile",
    tag = SETTINGS_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db)
        .update_profile(user.id, UpdateProfileParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Change the logged-in user's password.
///
/// # Returns
/// - `200 OK` - Password changed
/// - `400 Bad Request` - Missing, mismatching or wrong password
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    put,
    path = "/api/settings/password",
    tag = SETTINGS_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = StatusDto),
        (status = 400, description = "Invalid password data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    UserService::new(&state.db)
        .change_password(user.id, ChangePasswordParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto {
            status: "Das Passwort wurde geändert.".to_string(),
        }),
    ))
}
