use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;

use super::router;
use crate::server::{config::Config, state::AppState};

async fn app(db: DatabaseConnection) -> Router {
    let config = Config::from_lookup(|name| {
        (name == "DATABASE_URL").then(|| "sqlite::memory:".to_string())
    })
    .unwrap();

    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store.migrate().await.unwrap();

    router(AppState::new(db, config)).layer(SessionManagerLayer::new(store))
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Logs in and returns the session cookie to send with later requests.
async fn login(app: &Router, username: &str) -> String {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "username": username,
                "password": factory::user::DEFAULT_PASSWORD,
            })
            .to_string(),
        ))
        .unwrap();

    let response = send(app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();

    cookie.split(';').next().unwrap().to_string()
}

/// Tests that API routes reject requests without a login.
///
/// Expected: 401 Unauthorized
#[tokio::test]
async fn rejects_anonymous_api_request() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let app = app(test.db.clone().unwrap()).await;

    let request = Request::builder()
        .uri("/api/customers")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Tests that the OpenAPI document lists the registered routes.
///
/// Expected: 200 OK with customer and heartbeat paths
#[tokio::test]
async fn serves_openapi_document() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let app = app(test.db.clone().unwrap()).await;

    let request = Request::builder()
        .uri("/api/docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let doc = json_body(response).await;
    assert!(doc["paths"]["/api/customers"].is_object());
    assert!(doc["paths"]["/api/customers/{id}"]["delete"].is_object());
    assert!(doc["paths"]["/heartbeat/"]["post"].is_object());
}

/// Tests logging in and reading the current user with the session cookie.
///
/// Expected: 200 OK with the logged-in user
#[tokio::test]
async fn login_session_identifies_user() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();
    let user = factory::create_user(&db).await.unwrap();
    let app = app(db).await;

    let cookie = login(&app, &user.username).await;

    let request = Request::builder()
        .uri("/api/auth/user")
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["username"], user.username);
    assert_eq!(body["admin"], false);
}

/// Tests that a wrong password is rejected.
///
/// Expected: 401 Unauthorized
#[tokio::test]
async fn login_rejects_wrong_password() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();
    let user = factory::create_user(&db).await.unwrap();
    let app = app(db).await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "username": user.username, "password": "falsch" }).to_string(),
        ))
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Tests that deleting requires admin permission.
///
/// Expected: 403 Forbidden for a regular user, 204 No Content for an admin
#[tokio::test]
async fn delete_requires_admin() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();
    let user = factory::create_user(&db).await.unwrap();
    let admin = factory::user::UserFactory::new(&db)
        .admin(true)
        .build()
        .await
        .unwrap();
    let customer = factory::create_customer(&db).await.unwrap();
    let app = app(db.clone()).await;

    let delete = |cookie: String| {
        Request::builder()
            .method(Method::DELETE)
            .uri(format!("/api/customers/{}", customer.id))
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap()
    };

    let cookie = login(&app, &user.username).await;
    let response = send(&app, delete(cookie)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let cookie = login(&app, &admin.username).await;
    let response = send(&app, delete(cookie)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let remaining = entity::prelude::Customer::find_by_id(customer.id)
        .one(&db)
        .await
        .unwrap();
    assert!(remaining.is_none());
}

/// Tests that client installations post heartbeats as form data without a login.
///
/// Expected: 201 Created with the used product of the license's location
#[tokio::test]
async fn accepts_heartbeat_form_without_login() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();
    let (_, _, _, _, license) = factory::helpers::create_license_with_dependencies(&db)
        .await
        .unwrap();
    let app = app(db).await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/heartbeat/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!("key={}&log=Sicherung+erfolgreich", license.key)))
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Sicherung erfolgreich");
}

/// Tests a heartbeat with an unknown license key.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn rejects_heartbeat_for_unknown_key() {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let app = app(test.db.clone().unwrap()).await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/heartbeat/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("key=UNBEKANNT&log=ok"))
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
