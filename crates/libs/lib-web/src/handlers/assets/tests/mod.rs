//! # Asset Handler Tests

mod crud;

use crate::test_utils::{bearer, bitcoin_request, create_user, read_json, request, send, setup_test_db, test_app};
use axum::http::StatusCode;
use axum::Router;

/// App with a signed-in user, returning the router and an `Authorization` value.
async fn signed_in_app() -> (Router, String) {
    let pool = setup_test_db().await;
    let user = create_user(&pool, "ada@example.com", "ada", "secret1").await;
    (test_app(pool), bearer(user.id))
}

/// Create Bitcoin through the API and return its id.
async fn create_bitcoin(app: &Router, auth: &str) -> i64 {
    let response = send(app, request("POST", "/api/v1/assets", Some(auth), Some(&bitcoin_request()))).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    read_json(response).await["id"].as_i64().expect("Asset id")
}
