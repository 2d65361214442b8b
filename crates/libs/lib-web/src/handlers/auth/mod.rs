//! # Authentication Handlers
//!
//! HTTP request handlers for user authentication endpoints.
//!
//! ## Overview
//!
//! - Registration with email, username and password
//! - Login with email and password
//! - Bearer token issuance on both
//!
//! ## Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::post};
//! use lib_web::handlers::auth::{register, login};
//!
//! let app = Router::new()
//!     .route("/auth/register", post(register))
//!     .route("/auth/login", post(login))
//!     .with_state(state);
//! ```

#[cfg(test)]
mod tests;

use axum::{extract::State, http::StatusCode, Json};
use lib_auth::TokenService;
use lib_core::dto::{AuthResponse, LoginRequest, RegisterRequest};
use lib_core::{DbPool, Result};
use tracing::{info, instrument};

use crate::extract::ValidJson;
use crate::services::AuthService;

/// Register handler - creates a new user account.
///
/// # Returns
///
/// * `201 Created` with `{token, user}` on success
/// * `400` - Invalid email, username outside 3-20 characters, password under 6 characters
/// * `409` - Email or username already registered
#[instrument(skip(pool, tokens, req), fields(username = %req.username, email = %req.email))]
pub async fn register(
    State(pool): State<DbPool>,
    State(tokens): State<TokenService>,
    ValidJson(req): ValidJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    info!("[REGISTER] New user registration request");

    let response = AuthService::new(pool, tokens).register(req).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Login handler - authenticates with email and password.
///
/// Unknown email, disabled account and wrong password all produce the same
/// `401` response.
#[instrument(skip(pool, tokens, req), fields(email = %req.email))]
pub async fn login(
    State(pool): State<DbPool>,
    State(tokens): State<TokenService>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    info!("[LOGIN] Login attempt");

    let response = AuthService::new(pool, tokens).login(req).await?;

    Ok(Json(response))
}
