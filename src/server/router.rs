//! HTTP routes and OpenAPI documentation.
//!
//! Every handler is registered through `utoipa_axum::routes!` so the generated
//! OpenAPI document always matches the served routes. Swagger UI is served at
//! `/api/docs`.

use axum::{extract::DefaultBodyLimit, http::HeaderValue, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        adviser::*, auth::*, contact_person::*, customer::*, dashboard::*, heartbeat::*,
        license::*, license_heartbeat::*, location::*, module::*, product::*, search::*,
        settings::*, update::*,
    },
    state::AppState,
};

/// Largest accepted request body; update archives are uploaded as raw bodies.
const BODY_LIMIT: usize = 512 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Management Portal API",
        description = "Customers, software licenses, heartbeats and updates"
    ),
    tags(
        (name = AUTH_TAG, description = "Login and session"),
        (name = SETTINGS_TAG, description = "Own profile and password"),
        (name = DASHBOARD_TAG, description = "Start page counts"),
        (name = CUSTOMER_TAG, description = "Customers"),
        (name = LOCATION_TAG, description = "Customer locations"),
        (name = CONTACT_PERSON_TAG, description = "Contact persons at locations"),
        (name = ADVISER_TAG, description = "Customer advisers"),
        (name = PRODUCT_TAG, description = "Software products and their releases"),
        (name = MODULE_TAG, description = "Software modules"),
        (name = LICENSE_TAG, description = "Software licenses"),
        (name = HEARTBEAT_TAG, description = "Heartbeats of client installations"),
        (name = LICENSE_HEARTBEAT_TAG, description = "Replacement license exchange"),
        (name = UPDATE_TAG, description = "Software updates and installed versions"),
        (name = SEARCH_TAG, description = "Search"),
    )
)]
struct ApiDoc;

/// Builds the application router with API documentation, tracing and CORS.
///
/// The session layer is added by the caller.
pub fn router(state: AppState) -> Router {
    let cors_origin = state.config.cors_origin.clone();

    let (router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(login))
        .routes(routes!(logout))
        .routes(routes!(get_user))
        .routes(routes!(update_profile))
        .routes(routes!(change_password))
        .routes(routes!(get_dashboard))
        .routes(routes!(get_customers, create_customer))
        .routes(routes!(get_customer, update_customer, delete_customer))
        .routes(routes!(get_customer_locations))
        .routes(routes!(create_location))
        .routes(routes!(get_location, update_location, delete_location))
        .routes(routes!(get_location_contact_persons))
        .routes(routes!(create_contact_person))
        .routes(routes!(update_contact_person, delete_contact_person))
        .routes(routes!(get_advisers, create_adviser))
        .routes(routes!(update_adviser, delete_adviser))
        .routes(routes!(get_products, create_product))
        .routes(routes!(get_product, update_product, delete_product))
        .routes(routes!(get_product_updates, upload_product_update))
        .routes(routes!(create_module))
        .routes(routes!(update_module, delete_module))
        .routes(routes!(get_licenses, create_license))
        .routes(routes!(get_license_counts))
        .routes(routes!(get_license, update_license, delete_license))
        .routes(routes!(post_heartbeat))
        .routes(routes!(get_heartbeats))
        .routes(routes!(get_heartbeat_counts))
        .routes(routes!(get_used_product_heartbeats))
        .routes(routes!(check_license))
        .routes(routes!(confirm_license))
        .routes(routes!(get_updates))
        .routes(routes!(get_update_counts))
        .routes(routes!(download_update))
        .routes(routes!(delete_update))
        .routes(routes!(set_used_product_version))
        .routes(routes!(search))
        .split_for_parts();

    let mut router = router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(TraceLayer::new_for_http());

    if let Some(origin) = cors_origin {
        match origin.parse::<HeaderValue>() {
            Ok(origin) => {
                router = router.layer(
                    CorsLayer::new()
                        .allow_origin(origin)
                        .allow_credentials(true)
                        .allow_methods([
                            axum::http::Method::GET,
                            axum::http::Method::POST,
                            axum::http::Method::PUT,
                            axum::http::Method::DELETE,
                        ])
                        .allow_headers([axum::http::header::CONTENT_TYPE]),
                );
            }
            Err(e) => tracing::warn!("Ignoring invalid CORS_ORIGIN '{}': {}", origin, e),
        }
    }

    router.with_state(state)
}

#[cfg(test)]
mod test;
