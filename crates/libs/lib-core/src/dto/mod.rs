//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with API clients.
//! Request types carry their own `validate()`; response types are built from
//! stored models and never include secrets such as password hashes.

pub mod asset;
pub mod auth;
pub mod common;
pub mod transaction;
pub mod user;

pub use asset::*;
pub use auth::*;
pub use common::*;
pub use transaction::*;
pub use user::*;
