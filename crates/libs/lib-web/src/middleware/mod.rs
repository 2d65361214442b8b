//! # Middleware
//!
//! Axum middleware for authentication, request stamping, and request logging.
//!
//! ## Modules
//!
//! - **[`mw_auth`]**: Bearer token authentication and the [`CurrentUser`] extractor
//! - **[`mw_req_stamp`]**: Request ID stamping
//! - **[`mw_logging`]**: Request/response logging with header redaction

// region: --- Modules
pub mod mw_auth;
pub mod mw_logging;
pub mod mw_req_stamp;
// endregion: --- Modules

// region: --- Re-exports
pub use mw_auth::{require_auth, CurrentUser};
pub use mw_logging::log_requests;
pub use mw_req_stamp::{stamp_req, RequestStamp};
// endregion: --- Re-exports
