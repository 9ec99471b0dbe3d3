//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the full production router (same middleware stack as `main.rs`)
//! against a test database pool, plus small request/response helpers so
//! tests read as scenario -> assertion.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use promptvault_api::auth::jwt::JwtConfig;
use promptvault_api::config::ServerConfig;
use promptvault_api::router::build_app_router;
use promptvault_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and a known JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_days: 7,
        },
        notion: None,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request without authentication.
pub async fn get(app: Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Send a GET request with a bearer token.
pub async fn get_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Send a POST request with a JSON body, without authentication.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Send a POST request with a JSON body and a bearer token.
pub async fn post_json_auth(
    app: Router,
    path: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Send a POST request with an empty body and a bearer token.
pub async fn post_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Send a PUT request with a JSON body and a bearer token.
pub async fn put_json_auth(
    app: Router,
    path: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Send a DELETE request with a bearer token.
pub async fn delete_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes()
        .to_vec()
}

// ---------------------------------------------------------------------------
// Scenario helpers
// ---------------------------------------------------------------------------

/// Register a user via the API and return `(token, user_id)`.
pub async fn register_user(pool: &PgPool, name: &str, email: &str) -> (String, i64) {
    let body = serde_json::json!({
        "name": name,
        "email": email,
        "password": "hunter2-plus-entropy",
    });
    let response = post_json(build_test_app(pool.clone()), "/auth/register", body).await;
    assert_eq!(
        response.status(),
        axum::http::StatusCode::CREATED,
        "registration should succeed"
    );
    let json = body_json(response).await;
    let token = json["token"].as_str().expect("token should be present");
    let id = json["user"]["id"].as_i64().expect("user id should be present");
    (token.to_string(), id)
}

/// Register a user, promote them to admin directly in the database, and
/// log in again so the returned token carries the admin role.
pub async fn register_admin(pool: &PgPool, email: &str) -> String {
    register_user(pool, "Admin User", email).await;

    sqlx::query("UPDATE users SET role = 'admin' WHERE email = $1")
        .bind(email)
        .execute(pool)
        .await
        .expect("promotion should succeed");

    let body = serde_json::json!({
        "email": email,
        "password": "hunter2-plus-entropy",
    });
    let response = post_json(build_test_app(pool.clone()), "/auth/login", body).await;
    assert_eq!(
        response.status(),
        axum::http::StatusCode::OK,
        "admin login should succeed"
    );
    let json = body_json(response).await;
    json["token"]
        .as_str()
        .expect("token should be present")
        .to_string()
}

/// Create a prompt via the API and return its id.
pub async fn create_prompt(pool: &PgPool, token: &str, title: &str, text: &str) -> i64 {
    let body = serde_json::json!({ "title": title, "text": text });
    let response = post_json_auth(build_test_app(pool.clone()), "/prompts", body, token).await;
    assert_eq!(
        response.status(),
        axum::http::StatusCode::CREATED,
        "prompt creation should succeed"
    );
    let json = body_json(response).await;
    json["id"].as_i64().expect("prompt id should be present")
}

/// Publish a prompt via the API.
pub async fn publish_prompt(pool: &PgPool, token: &str, id: i64) {
    let response = post_auth(
        build_test_app(pool.clone()),
        &format!("/community/{id}/publish"),
        token,
    )
    .await;
    assert_eq!(
        response.status(),
        axum::http::StatusCode::OK,
        "publish should succeed"
    );
}
