//! # Services Layer
//!
//! Business logic that sits between the HTTP handlers and the repositories.
//!
//! ```text
//! Handlers (HTTP) → Services (Business Logic) → Repositories → SQLite
//! ```
//!
//! ## Module Organization
//!
//! - [`auth`] - Registration and login
//! - [`user`] - User profile reads, updates and deletion
//! - [`asset`] - Asset CRUD
//! - [`transaction`] - Transaction engine (valuation, asset checks, snapshots)
//!
//! ## Service Pattern
//!
//! Services are cheap structs that hold their dependencies (a `DbPool`, the
//! `TokenService`) and expose async methods returning `Result<T, AppError>`:
//!
//! ```rust,ignore
//! let service = TransactionService::new(pool);
//! let tx = service.create(current_user.user_id, request).await?;
//! ```
//!
//! Updates use the row `version` as an optimistic lock: the service reads the
//! record, applies the change against the version it read, and reports a
//! conflict if another writer got there first.

pub mod asset;
pub mod auth;
pub mod transaction;
pub mod user;

// Re-export services for convenience
pub use asset::AssetService;
pub use auth::{AuthService, LoginFailure};
pub use transaction::TransactionService;
pub use user::UserService;

use lib_core::AppError;

/// Error for a versioned write that matched no row.
///
/// `still_exists` tells a lost race (409) apart from a record deleted meanwhile (404).
pub(crate) fn stale_write(entity: &str, still_exists: bool) -> AppError {
    if still_exists {
        AppError::Conflict(format!(
            "{entity} was modified concurrently, retry the request"
        ))
    } else {
        not_found(entity)
    }
}

pub(crate) fn not_found(entity: &str) -> AppError {
    AppError::NotFound(format!(
        "The requested {} does not exist",
        entity.to_lowercase()
    ))
}

/// Map a UNIQUE violation to `Conflict(message)`, anything else through the default conversion.
pub(crate) fn unique_conflict(err: sqlx::Error, message: &str) -> AppError {
    match err {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(message.to_string())
        }
        other => other.into(),
    }
}
