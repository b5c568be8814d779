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
        location::{LocationDetailDto, LocationDto, SaveLocationDto},
        person::ContactPersonDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::location::SaveLocationParams,
        service::{contact_person::ContactPersonService, location::LocationService},
        state::AppState,
    },
};

pub static LOCATION_TAG: &str = "location";

/// Create a location for a customer.
///
/// Customer licenses cover the new location right away, so their used products are
/// created along with it.
#[utoipa::path(
    post,
    path = "/api/locations",
    tag = LOCATION_TAG,
    request_body = SaveLocationDto,
    responses(
        (status = 201, description = "Location created", body = LocationDto),
        (status = 400, description = "Invalid location data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_location(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let location = LocationService::new(&state.db)
        .create(SaveLocationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(location.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/locations/{id}",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Location ID")),
    responses(
        (status = 200, description = "Location with adviser and contact persons", body = LocationDetailDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_location(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let location = LocationService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(location.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/locations/{id}",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Location ID")),
    request_body = SaveLocationDto,
    responses(
        (status = 200, description = "Location updated", body = LocationDto),
        (status = 400, description = "Invalid location data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_location(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let location = LocationService::new(&state.db)
        .update(id, SaveLocationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(location.into_dto())))
}

/// Delete a location with its contact persons, licenses and used products.
///
/// # Access Control
/// - `Admin` - Only admins can delete locations
#[utoipa::path(
    delete,
    path = "/api/locations/{id}",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Location ID")),
    responses(
        (status = 204, description = "Location deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin permission required", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_location(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    LocationService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/locations/{id}/contact-persons",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Location ID")),
    responses(
        (status = 200, description = "Contact persons of the location", body = Vec<ContactPersonDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_location_contact_persons(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let persons = ContactPersonService::new(&state.db)
        .list_by_location(id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(persons.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}
