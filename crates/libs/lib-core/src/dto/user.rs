use serde::{Deserialize, Serialize};

use crate::dto::auth::{USERNAME_MAX_LEN, USERNAME_MIN_LEN};
use crate::error::{AppError, Result};
use crate::model::store::models::UserForUpdate;
use lib_utils::{validate_email, validate_length_range};

/// Sparse profile update. Absent (or `null`) fields are left unchanged;
/// an empty string clears a name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(email) = &self.email {
            validate_email(email).map_err(AppError::InvalidInput)?;
        }
        if let Some(username) = &self.username {
            validate_length_range(username, USERNAME_MIN_LEN, USERNAME_MAX_LEN, "Username")
                .map_err(AppError::InvalidInput)?;
        }
        Ok(())
    }
}

impl From<UpdateUserRequest> for UserForUpdate {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            email: req.email,
            username: req.username,
            first_name: req.first_name,
            last_name: req.last_name,
            is_active: req.is_active,
        }
    }
}
