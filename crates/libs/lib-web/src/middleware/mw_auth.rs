//! # Authentication Middleware
//!
//! Axum middleware for bearer token validation.
//!
//! The middleware reads the `Authorization` header, validates the token with the
//! shared [`TokenService`], and stores the resolved [`CurrentUser`] in request
//! extensions. Handlers must take identity from [`CurrentUser`] only, never from
//! a request body.
//!
//! ```text
//! no header                  -> 401 "Authorization header required"
//! header without "Bearer "   -> 401 "Invalid authorization header format"
//! bad/expired token          -> 401 "Invalid token"
//! valid token                -> CurrentUser { user_id } attached, request continues
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use lib_web::middleware::{require_auth, CurrentUser};
//!
//! async fn whoami(user: CurrentUser) -> String {
//!     format!("user {}", user.user_id)
//! }
//!
//! let app = Router::new()
//!     .route("/whoami", get(whoami))
//!     .route_layer(from_fn_with_state(state.clone(), require_auth))
//!     .with_state(state);
//! ```

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use lib_auth::TokenService;
use lib_core::AppError;
use tracing::{debug, warn};

/// Identity of the authenticated caller, resolved from a validated token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: i64,
}

/// Authentication middleware that validates bearer tokens.
///
/// # Behavior
///
/// - **Valid token**: Continues to next middleware/handler with [`CurrentUser`] in extensions
/// - **Missing/malformed header or invalid token**: Returns `401 Unauthorized`
pub async fn require_auth(
    State(tokens): State<TokenService>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path().to_string();

    // Extract Authorization header
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            warn!("[AUTH] Missing Authorization header for {}", path);
            AppError::Unauthorized("Authorization header required".to_string())
        })?;

    // Extract Bearer token
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("[AUTH] Invalid Authorization header format for {}", path);
        AppError::Unauthorized("Invalid authorization header format".to_string())
    })?;

    let user_id = tokens.validate(token.trim()).map_err(|e| {
        warn!("[AUTH] Token validation failed for {}: {}", path, e);
        AppError::Unauthorized("Invalid token".to_string())
    })?;

    debug!("[AUTH] Authenticated user {} for {}", user_id, path);

    req.extensions_mut().insert(CurrentUser { user_id });

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .copied()
            .ok_or_else(|| AppError::Unauthorized("User ID not found in token".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{read_json, test_config};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        middleware::from_fn_with_state,
        routing::get,
        Router,
    };
    use chrono::{Duration, Utc};
    use tower::ServiceExt;

    async fn whoami(user: CurrentUser) -> String {
        user.user_id.to_string()
    }

    fn tokens() -> TokenService {
        let config = test_config();
        TokenService::new(&config.jwt_secret, config.jwt_expiration_hours)
    }

    fn app() -> Router {
        let tokens = tokens();
        Router::new()
            .route("/whoami", get(whoami))
            .route_layer(from_fn_with_state(tokens.clone(), require_auth))
            .with_state(tokens)
    }

    async fn call(auth: Option<&str>) -> axum::response::Response {
        let mut builder = Request::builder().uri("/whoami");
        if let Some(value) = auth {
            builder = builder.header("authorization", value);
        }

        app()
            .oneshot(builder.body(Body::empty()).expect("Failed to build request"))
            .await
            .expect("Request failed")
    }

    #[tokio::test]
    async fn test_missing_header_rejected() {
        let response = call(None).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = read_json(response).await;
        assert_eq!(body["error"], "Unauthorized");
        assert_eq!(body["message"], "Authorization header required");
    }

    #[tokio::test]
    async fn test_header_without_bearer_prefix_rejected() {
        let token = tokens().issue(1).expect("Token issuance should succeed");

        for value in [token.clone(), format!("Token {token}"), format!("bearer {token}")] {
            let response = call(Some(&value)).await;
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

            let body = read_json(response).await;
            assert_eq!(body["message"], "Invalid authorization header format");
        }
    }

    #[tokio::test]
    async fn test_invalid_token_rejected() {
        let response = call(Some("Bearer not-a-token")).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = read_json(response).await;
        assert_eq!(body["message"], "Invalid token");
    }

    #[tokio::test]
    async fn test_expired_token_rejected() {
        let token = tokens()
            .issue_at(1, Utc::now() - Duration::hours(25))
            .expect("Token issuance should succeed");

        let response = call(Some(&format!("Bearer {token}"))).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_valid_token_attaches_user() {
        let token = tokens().issue(7).expect("Token issuance should succeed");

        let response = call(Some(&format!("Bearer {token}"))).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        assert_eq!(&body[..], b"7");
    }

    #[tokio::test]
    async fn test_extractor_without_middleware_is_unauthorized() {
        let app = Router::new().route("/whoami", get(whoami));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/whoami")
                    .body(Body::empty())
                    .expect("Failed to build request"),
            )
            .await
            .expect("Request failed");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
