use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, dashboard::DashboardDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::dashboard::DashboardService,
        state::AppState,
    },
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

/// Get heartbeat, license and update counts for the start page.
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard counts", body = DashboardDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let dashboard = DashboardService::new(&state.db)
        .summary(state.windows(), Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}
