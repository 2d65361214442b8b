//! # Authentication Data Transfer Objects
//!
//! Defines request and response structures for authentication endpoints.
//!
//! ## Endpoints Using These DTOs
//!
//! - `POST /api/v1/auth/register` - [`RegisterRequest`] -> [`AuthResponse`] (201)
//! - `POST /api/v1/auth/login` - [`LoginRequest`] -> [`AuthResponse`] (200)
//!
//! ## Wire Format
//!
//! All DTOs use **snake_case** field names in JSON (default serde behavior).
//!
//! ```text
//! POST /api/v1/auth/register
//! Content-Type: application/json
//!
//! {
//!   "email": "alice@example.com",
//!   "username": "alice",
//!   "password": "secret1",
//!   "first_name": "Alice",
//!   "last_name": "Liddell"
//! }
//! ```
//!
//! Response:
//! ```text
//! {
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "user": {
//!     "id": 1,
//!     "email": "alice@example.com",
//!     "username": "alice",
//!     "first_name": "Alice",
//!     "last_name": "Liddell",
//!     "is_active": true,
//!     "created_at": "2024-01-01T00:00:00Z",
//!     "updated_at": "2024-01-01T00:00:00Z"
//!   }
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::model::store::models::User;
use lib_utils::{validate_email, validate_length_range, validate_min_length, validate_not_empty};

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 20;
pub const PASSWORD_MIN_LEN: usize = 6;

/// Registration request. Names are optional and default to empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<()> {
        validate_email(&self.email).map_err(AppError::InvalidInput)?;
        validate_length_range(&self.username, USERNAME_MIN_LEN, USERNAME_MAX_LEN, "Username")
            .map_err(AppError::InvalidInput)?;
        validate_min_length(&self.password, PASSWORD_MIN_LEN, "Password")
            .map_err(AppError::InvalidInput)?;
        Ok(())
    }
}

/// Login with email and password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<()> {
        validate_email(&self.email).map_err(AppError::InvalidInput)?;
        validate_not_empty(&self.password, "Password").map_err(AppError::InvalidInput)?;
        Ok(())
    }
}

/// Public user data. The password hash is never part of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

/// Successful register/login response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}
