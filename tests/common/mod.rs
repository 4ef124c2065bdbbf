// Each integration test binary compiles its own copy of this module and
// uses a different subset of the helpers.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use usergate::config::cors::CorsConfig;
use usergate::config::jwt::JwtConfig;
use usergate::modules::auth::blacklist::TokenBlacklist;
use usergate::modules::auth::events::{AuthEvents, spawn_audit_logger};
use usergate::router::init_router;
use usergate::state::AppState;
use usergate::store::DataStore;

/// Low bcrypt cost so seeding does not dominate test time.
pub const TEST_BCRYPT_COST: u32 = 4;

pub const ADMIN_EMAIL: &str = "ploew@example.com";
pub const USER_EMAIL: &str = "bfgates@example.com";
pub const INACTIVE_EMAIL: &str = "ctroy@example.com";
pub const SEED_PASSWORD: &str = "P@ssword1";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        issuer: "usergate".to_string(),
        audience: "usergate-clients".to_string(),
        token_expiry: 3600,
    }
}

pub fn test_state() -> AppState {
    AppState {
        store: Arc::new(DataStore::seeded(TEST_BCRYPT_COST)),
        blacklist: Arc::new(TokenBlacklist::new()),
        auth_events: AuthEvents::default(),
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    }
}

/// Builds the full application with a freshly seeded store and a running
/// audit logger. The state is returned alongside the router so tests can
/// inspect the store and blacklist directly.
pub fn setup_test_app() -> (Router, AppState) {
    let state = test_state();
    spawn_audit_logger(state.clone());
    (init_router(state.clone()), state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn with_bearer(builder: axum::http::request::Builder, token: Option<&str>) -> axum::http::request::Builder {
    match token {
        Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {}", token)),
        None => builder,
    }
}

pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let request = with_bearer(Request::builder().method("GET").uri(uri), token)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: &Value,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let request = with_bearer(Request::builder().method("POST").uri(uri), token)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap();
    send(app, request).await
}

pub async fn post_empty(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let request = with_bearer(Request::builder().method("POST").uri(uri), token)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn put_json(
    app: &Router,
    uri: &str,
    body: &Value,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let request = with_bearer(Request::builder().method("PUT").uri(uri), token)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let request = with_bearer(Request::builder().method("DELETE").uri(uri), token)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Logs in and returns the raw login response body.
pub async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    post_json(
        app,
        "/api/auth/login",
        &json!({ "email": email, "password": password }),
        None,
    )
    .await
}

/// Logs in, asserting success, and returns just the token.
pub async fn login_token(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = login(app, email, password).await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}
