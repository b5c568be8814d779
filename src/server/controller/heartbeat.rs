use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        heartbeat::{
            HeartbeatCountsDto, HeartbeatDto, HeartbeatForm, HeartbeatOverviewItemDto,
            PaginatedHeartbeatsDto,
        },
    },
    server::{
        controller::{ListParams, PaginationParams},
        error::AppError,
        middleware::auth::AuthGuard,
        model::heartbeat::IngestHeartbeatParams,
        service::heartbeat::HeartbeatService,
        state::AppState,
    },
};

/// Tag for grouping heartbeat endpoints in OpenAPI documentation
pub static HEARTBEAT_TAG: &str = "heartbeat";

/// Receive a heartbeat from a client installation.
///
/// Sent as `application/x-www-form-urlencoded` by the heartbeat agent. No login is
/// required; the license key identifies the installation.
///
/// # Returns
/// - `201 Created` - Heartbeat stored
/// - `400 Bad Request` - Location ambiguous or not owned by the license's customer
/// - `404 Not Found` - Unknown license key
#[utoipa::path(
    post,
    path = "/heartbeat/",
    tag = HEARTBEAT_TAG,
    request_body(content = HeartbeatForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Heartbeat stored", body = HeartbeatDto),
        (status = 400, description = "Location cannot be determined", body = ErrorDto),
        (status = 404, description = "License not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_heartbeat(
    State(state): State<AppState>,
    Form(form): Form<HeartbeatForm>,
) -> Result<impl IntoResponse, AppError> {
    let heartbeat = HeartbeatService::new(&state.db)
        .ingest(IngestHeartbeatParams::from_form(form), Utc::now())
        .await?;

    Ok((StatusCode::CREATED, Json(heartbeat.into_dto())))
}

/// Get used products with their newest heartbeat, missing ones first.
#[utoipa::path(
    get,
    path = "/api/heartbeats",
    tag = HEARTBEAT_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Heartbeat overview", body = Vec<HeartbeatOverviewItemDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_heartbeats(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let items = HeartbeatService::new(&state.db)
        .overview(
            params.effective_limit(state.config.list_limit),
            state.windows().heartbeat,
            Utc::now(),
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(items.into_iter().map(|i| i.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/heartbeats/counts",
    tag = HEARTBEAT_TAG,
    responses(
        (status = 200, description = "Received and missing heartbeats", body = HeartbeatCountsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_heartbeat_counts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let counts = HeartbeatService::new(&state.db)
        .counts(state.windows().heartbeat, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(counts.into_dto())))
}

/// Get a page of heartbeats of one used product, newest first.
#[utoipa::path(
    get,
    path = "/api/used-products/{id}/heartbeats",
    tag = HEARTBEAT_TAG,
    params(
        ("id" = i32, Path, description = "Used product ID"),
        PaginationParams
    ),
    responses(
        (status = 200, description = "Page of heartbeats", body = PaginatedHeartbeatsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Used product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_used_product_heartbeats(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let heartbeats = HeartbeatService::new(&state.db)
        .list_for_used_product(id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(heartbeats.into_dto())))
}
