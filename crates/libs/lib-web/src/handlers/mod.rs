//! # HTTP Request Handlers
//!
//! This module contains all Axum HTTP request handlers organized by feature domain.
//!
//! Each handler module handles all HTTP endpoints for one resource and delegates
//! business logic to services in the [`crate::services`] module.
//!
//! ## Handler Modules
//!
//! - **[`auth`]**: Registration and login (public)
//!   - `POST /api/v1/auth/register` - Create account, returns token
//!   - `POST /api/v1/auth/login` - Authenticate with email/password
//!
//! - **[`users`]**: User profiles (bearer token)
//!   - `GET /api/v1/users`, `GET|PUT|DELETE /api/v1/users/{id}`
//!
//! - **[`assets`]**: Asset catalogue (bearer token)
//!   - `GET|POST /api/v1/assets`, `GET|PUT|DELETE /api/v1/assets/{id}`
//!
//! - **[`transactions`]**: Transaction engine (bearer token)
//!   - `GET|POST /api/v1/transactions`, `GET|PUT|DELETE /api/v1/transactions/{id}`
//!
//! ## Handler Architecture
//!
//! All handlers follow Axum's extractor pattern and return `Result<_, AppError>`:
//!
//! ```rust,ignore
//! async fn handler(
//!     State(db): State<DbPool>,              // Shared state
//!     user: CurrentUser,                     // Identity from the auth middleware
//!     ValidJson(payload): ValidJson<Body>,   // Request body, 400 on bad JSON
//! ) -> Result<Json<Response>> {
//!     // Handler logic...
//!     Ok(Json(response))
//! }
//! ```
//!
//! Path ids are taken as strings and parsed with [`crate::extract::parse_id`]
//! so a non-numeric id produces the common 400 body.

pub mod assets;
pub mod auth;
pub mod transactions;
pub mod users;
