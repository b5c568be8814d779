use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        customer::{CustomerDetailDto, CustomerDto, PaginatedCustomersDto, SaveCustomerDto},
        location::LocationDto,
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::customer::SaveCustomerParams,
        service::{customer::CustomerService, location::LocationService},
        state::AppState,
    },
};

/// Tag for grouping customer endpoints in OpenAPI documentation
pub static CUSTOMER_TAG: &str = "customer";

/// Get a page of customers ordered by name.
///
/// # Returns
/// - `200 OK` - Customers with their number of locations
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of customers", body = PaginatedCustomersDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customers(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let customers = CustomerService::new(&state.db)
        .list(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(customers.into_dto())))
}

/// Create a customer.
///
/// # Returns
/// - `201 Created` - Created customer
/// - `400 Bad Request` - Missing or overlong field
/// - `401 Unauthorized` - Not logged in
/// - `409 Conflict` - Customer number already taken
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    request_body = SaveCustomerDto,
    responses(
        (status = 201, description = "Customer created", body = CustomerDto),
        (status = 400, description = "Invalid customer data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Customer number already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_customer(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let customer = CustomerService::new(&state.db)
        .create(SaveCustomerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(customer.into_dto())))
}

/// Get a customer with its locations.
#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = CUSTOMER_TAG,
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer with locations", body = CustomerDetailDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let customer = CustomerService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(customer.into_dto())))
}

/// Update customer number and name.
#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    tag = CUSTOMER_TAG,
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = SaveCustomerDto,
    responses(
        (status = 200, description = "Customer updated", body = CustomerDto),
        (status = 400, description = "Invalid customer data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 409, description = "Customer number already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_customer(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let customer = CustomerService::new(&state.db)
        .update(id, SaveCustomerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(customer.into_dto())))
}

/// Delete a customer with its locations, licenses and used products.
///
/// # Access Control
/// - `Admin` - Only admins can delete customers
#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = CUSTOMER_TAG,
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin permission required", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    CustomerService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the locations of a customer.
#[utoipa::path(
    get,
    path = "/api/customers/{id}/locations",
    tag = CUSTOMER_TAG,
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Locations of the customer", body = Vec<LocationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer_locations(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let locations = LocationService::new(&state.db)
        .list_by_customer(id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            locations
                .into_iter()
                .map(|l| l.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}
