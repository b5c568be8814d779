use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// User is logged in but lacks a required permission.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Username unknown or password did not verify.
    #[error("Invalid credentials for user '{0}'")]
    InvalidCredentials(String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level while client-facing messages stay generic.
///
/// # Returns
/// - 401 Unauthorized - Not logged in, stale session or wrong credentials
/// - 403 Forbidden - Missing permission
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Bitte melden Sie sich an.")
            }
            Self::InvalidCredentials(_) => (
                StatusCode::UNAUTHORIZED,
                "Benutzername oder Passwort ist falsch.",
            ),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "Sie haben keine Berechtigung für diese Aktion.",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
