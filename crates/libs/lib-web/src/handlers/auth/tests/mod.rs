//! # Auth Handler Tests
//!
//! Test suite for authentication handlers (register and login), driven through
//! the full application router.


use crate::test_utils::{read_json, request, send, setup_test_db, test_app};
use axum::http::StatusCode;
use axum::Router;
use lib_core::dto::{AuthResponse, LoginRequest, RegisterRequest};
use lib_core::DbPool;

const REGISTER: &str = "/api/v1/auth/register";
const LOGIN: &str = "/api/v1/auth/login";

fn register_request(email: &str, username: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.to_string(),
        username: username.to_string(),
        password: password.to_string(),
        first_name: String::new(),
        last_name: String::new(),
    }
}

fn login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

async fn app() -> (Router, DbPool) {
    let pool = setup_test_db().await;
    (test_app(pool.clone()), pool)
}

/// Register through the API and return the parsed response.
async fn register_ok(app: &Router, email: &str, username: &str, password: &str) -> AuthResponse {
    let response = send(
        app,
        request("POST", REGISTER, None, Some(&register_request(email, username, password))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    serde_json::from_value(read_json(response).await).expect("Body should be an AuthResponse")
}
