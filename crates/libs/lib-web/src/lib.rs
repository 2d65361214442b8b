//! # Web Library
//!
//! HTTP handlers, middleware, services, and server setup for the asset ledger API.
//!
//! ## Endpoints
//!
//! All API routes live under `/api/v1`. Everything except registration, login
//! and `/health` requires `Authorization: Bearer <token>`.
//!
//! ```text
//! POST   /api/v1/auth/register
//! POST   /api/v1/auth/login
//! GET    /api/v1/users                 GET|PUT|DELETE /api/v1/users/{id}
//! GET    /api/v1/assets       (+POST)  GET|PUT|DELETE /api/v1/assets/{id}
//! GET    /api/v1/transactions (+POST)  GET|PUT|DELETE /api/v1/transactions/{id}
//! GET    /health
//! ```

pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod services;

#[cfg(test)]
pub(crate) mod test_utils;

pub use server::{create_router, start_server, AppState};
