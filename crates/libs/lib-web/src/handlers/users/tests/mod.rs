//! # User Handler Tests


use crate::test_utils::{bearer, create_user, read_json, request, send, setup_test_db, test_app};
use axum::http::StatusCode;
use axum::Router;
use lib_core::model::store::models::User;
use lib_core::DbPool;

/// App with one existing user, plus that user's `Authorization` value.
async fn app_with_user() -> (Router, DbPool, User, String) {
    let pool = setup_test_db().await;
    let user = create_user(&pool, "ada@example.com", "ada", "secret1").await;
    let auth = bearer(user.id);
    (test_app(pool.clone()), pool, user, auth)
}
