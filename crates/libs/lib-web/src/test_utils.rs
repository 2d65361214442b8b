//! # Test Utilities
//!
//! Shared fixtures for service, middleware and handler tests: an in-memory
//! database with migrations applied, a valid config, and request helpers for
//! driving the full router with `tower::ServiceExt::oneshot`.

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use lib_auth::{hash_password, TokenService};
use lib_core::dto::CreateAssetRequest;
use lib_core::model::store::models::{User, UserForCreate};
use lib_core::model::store::UserRepository;
use lib_core::{create_pool, run_migrations, Config, DbPool};
use serde::Serialize;
use tower::ServiceExt;

use crate::server::{create_router, AppState};

/// Fresh in-memory database with the schema applied.
pub async fn setup_test_db() -> DbPool {
    let pool = create_pool("sqlite::memory:")
        .await
        .expect("Failed to create test database");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret-key-must-be-at-least-32-characters-long!".to_string(),
        jwt_expiration_hours: 24,
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: "test".to_string(),
        cors_allowed_origins: vec!["http://localhost:3000".to_string()],
        log_level: "debug".to_string(),
    }
}

pub fn test_tokens() -> TokenService {
    let config = test_config();
    TokenService::new(&config.jwt_secret, config.jwt_expiration_hours)
}

pub fn test_state(pool: DbPool) -> AppState {
    AppState::new(pool, test_config())
}

/// Full application router over `pool`, middleware included.
pub fn test_app(pool: DbPool) -> Router {
    create_router(test_state(pool))
}

/// Insert an active user directly, bypassing registration.
pub async fn create_user(pool: &DbPool, email: &str, username: &str, password: &str) -> User {
    let password_hash = hash_password(password).expect("Failed to hash password");

    UserRepository::create(
        pool,
        UserForCreate {
            email: email.to_string(),
            username: username.to_string(),
            password_hash,
            first_name: String::new(),
            last_name: String::new(),
        },
    )
    .await
    .expect("Failed to create user")
}

pub fn bitcoin_request() -> CreateAssetRequest {
    CreateAssetRequest {
        name: "Bitcoin".to_string(),
        symbol: "BTC".to_string(),
        asset_type: "cryptocurrency".to_string(),
        description: String::new(),
        price: 50000.0,
    }
}

/// Bearer token for `user_id` signed with the test secret.
pub fn bearer(user_id: i64) -> String {
    let token = test_tokens()
        .issue(user_id)
        .expect("Token issuance should succeed");
    format!("Bearer {token}")
}

/// Build a request with an optional JSON body and optional `Authorization` value.
pub fn request<T: Serialize>(
    method: &str,
    uri: &str,
    auth: Option<&str>,
    body: Option<&T>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = auth {
        builder = builder.header("authorization", value);
    }

    let body = match body {
        Some(payload) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_string(payload).expect("Failed to serialize body"))
        }
        None => Body::empty(),
    };

    builder.body(body).expect("Failed to build request")
}

/// Request with a raw body string, for malformed payloads.
pub fn raw_request(method: &str, uri: &str, auth: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(value) = auth {
        builder = builder.header("authorization", value);
    }

    builder
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

/// Send one request through a clone of `app`.
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.expect("Request failed")
}

pub async fn read_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}
