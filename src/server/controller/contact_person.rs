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
        person::{ContactPersonDto, SaveContactPersonDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::person::SaveContactPersonParams,
        service::contact_person::ContactPersonService,
        state::AppState,
    },
};

pub static CONTACT_PERSON_TAG: &str = "contact-person";

/// Create a contact person at a location.
///
/// `product_ids` assigns the products the person is responsible for.
#[utoipa::path(
    post,
    path = "/api/contact-persons",
    tag = CONTACT_PERSON_TAG,
    request_body = SaveContactPersonDto,
    responses(
        (status = 201, description = "Contact person created", body = ContactPersonDto),
        (status = 400, description = "Invalid contact person data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_contact_person(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveContactPersonDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let person = ContactPersonService::new(&state.db)
        .create(SaveContactPersonParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(person.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/contact-persons/{id}",
    tag = CONTACT_PERSON_TAG,
    params(("id" = i32, Path, description = "Contact person ID")),
    request_body = SaveContactPersonDto,
    responses(
        (status = 200, description = "Contact person updated", body = ContactPersonDto),
        (status = 400, description = "Invalid contact person data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Contact person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_contact_person(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveContactPersonDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let person = ContactPersonService::new(&state.db)
        .update(id, SaveContactPersonParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(person.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/contact-persons/{id}",
    tag = CONTACT_PERSON_TAG,
    params(("id" = i32, Path, description = "Contact person ID")),
    responses(
        (status = 204, description = "Contact person deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin permission required", body = ErrorDto),
        (status = 404, description = "Contact person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_contact_person(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ContactPersonService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
