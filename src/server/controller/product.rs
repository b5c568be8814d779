use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use utoipa::IntoParams;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        product::{ProductDetailDto, ProductDto, ProductListItemDto, SaveProductDto},
        update::SoftwareUpdateDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{product::SaveProductParams, update::CreateUpdateParams},
        service::{software_product::SoftwareProductService, update::UpdateService},
        state::AppState,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UploadUpdateParams {
    /// Version of the release
    pub version: String,
}

/// Get all products with their number of modules.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "All products", body = Vec<ProductListItemDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let products = SoftwareProductService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(products.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = PRODUCT_TAG,
    request_body = SaveProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let product = SoftwareProductService::new(&state.db)
        .create(SaveProductParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product with modules", body = ProductDetailDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let product = SoftwareProductService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    request_body = SaveProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let product = SoftwareProductService::new(&state.db)
        .update(id, SaveProductParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Delete a product with its modules, licenses, used products and updates.
///
/// # Access Control
/// - `Admin` - Only admins can delete products
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin permission required", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    SoftwareProductService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the released updates of a product, newest first.
#[utoipa::path(
    get,
    path = "/api/products/{id}/updates",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Updates of the product", body = Vec<SoftwareUpdateDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product_updates(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let updates = UpdateService::new(&state.db).list_by_product(id).await?;

    Ok((
        StatusCode::OK,
        Json(updates.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Upload a release of a product.
///
/// The request body is the raw update archive. The product's version becomes the
/// uploaded version.
#[utoipa::path(
    post,
    path = "/api/products/{id}/updates",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID"),
        UploadUpdateParams
    ),
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 201, description = "Update stored", body = SoftwareUpdateDto),
        (status = 400, description = "Missing version or empty file", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_product_update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Query(params): Query<UploadUpdateParams>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let update = UpdateService::new(&state.db)
        .create(
            CreateUpdateParams {
                product_id: id,
                version: params.version,
                content: body.to_vec(),
            },
            Utc::now(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(update.into_dto())))
}
