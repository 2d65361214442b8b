//! # User Handlers
//!
//! Profile reads, sparse updates and soft deletion. All routes sit behind the
//! auth middleware.

#[cfg(test)]
mod tests;

use axum::{
    extract::{Path, State},
    Json,
};
use lib_core::dto::{MessageResponse, UpdateUserRequest, UserInfo};
use lib_core::{DbPool, Result};
use tracing::instrument;

use crate::extract::{parse_id, ValidJson};
use crate::middleware::CurrentUser;
use crate::services::UserService;

const ENTITY: &str = "User";

pub async fn list_users(State(pool): State<DbPool>) -> Result<Json<Vec<UserInfo>>> {
    let users = UserService::new(pool).list().await?;
    Ok(Json(users))
}

pub async fn get_user(
    State(pool): State<DbPool>,
    Path(id): Path<String>,
) -> Result<Json<UserInfo>> {
    let id = parse_id(&id, ENTITY)?;
    let user = UserService::new(pool).get(id).await?;
    Ok(Json(user))
}

/// Apply the fields present in the body. `"is_active": false` disables login.
#[instrument(skip(pool, current, req), fields(caller = current.user_id))]
pub async fn update_user(
    State(pool): State<DbPool>,
    current: CurrentUser,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateUserRequest>,
) -> Result<Json<UserInfo>> {
    let id = parse_id(&id, ENTITY)?;
    let user = UserService::new(pool).update(id, req).await?;
    Ok(Json(user))
}

#[instrument(skip(pool, current), fields(caller = current.user_id))]
pub async fn delete_user(
    State(pool): State<DbPool>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id(&id, ENTITY)?;
    UserService::new(pool).delete(id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
