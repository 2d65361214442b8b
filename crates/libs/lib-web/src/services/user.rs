//! # User Service
//!
//! Profile reads, sparse updates and soft deletion. Users are created through
//! [`AuthService::register`](super::AuthService::register) only.

use lib_core::dto::{UpdateUserRequest, UserInfo};
use lib_core::model::store::UserRepository;
use lib_core::{DbPool, Result};
use tracing::{info, instrument};

use super::{not_found, stale_write, unique_conflict};

const ENTITY: &str = "User";

#[derive(Clone)]
pub struct UserService {
    db: DbPool,
}

impl UserService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<UserInfo>> {
        let users = UserRepository::list(&self.db).await?;
        Ok(users.into_iter().map(UserInfo::from).collect())
    }

    pub async fn get(&self, id: i64) -> Result<UserInfo> {
        UserRepository::find_by_id(&self.db, id)
            .await?
            .map(UserInfo::from)
            .ok_or_else(|| not_found(ENTITY))
    }

    #[instrument(skip(self, req))]
    pub async fn update(&self, id: i64, req: UpdateUserRequest) -> Result<UserInfo> {
        req.validate()?;

        let current = UserRepository::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| not_found(ENTITY))?;

        let updated = UserRepository::update(&self.db, id, current.version, req.into())
            .await
            .map_err(|e| unique_conflict(e, "Email or username is already taken"))?;

        match updated {
            Some(user) => {
                info!("[USER] Updated user {} (version {})", user.id, user.version);
                Ok(UserInfo::from(user))
            }
            None => {
                let still_exists = UserRepository::find_by_id(&self.db, id).await?.is_some();
                Err(stale_write(ENTITY, still_exists))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<()> {
        if !UserRepository::soft_delete(&self.db, id).await? {
            return Err(not_found(ENTITY));
        }
        info!("[USER] Deleted user {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_user, setup_test_db};
    use lib_core::AppError;

    #[tokio::test]
    async fn test_sparse_update_keeps_other_fields() {
        let pool = setup_test_db().await;
        let user = create_user(&pool, "ada@example.com", "ada", "secret1").await;
        let service = UserService::new(pool);

        let updated = service
            .update(
                user.id,
                UpdateUserRequest {
                    last_name: Some("Byron".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect("Update should succeed");

        assert_eq!(updated.last_name, "Byron");
        assert_eq!(updated.email, "ada@example.com");
        assert_eq!(updated.username, "ada");
    }

    #[tokio::test]
    async fn test_update_to_taken_username_conflicts() {
        let pool = setup_test_db().await;
        create_user(&pool, "ada@example.com", "ada", "secret1").await;
        let other = create_user(&pool, "bob@example.com", "bob", "secret1").await;
        let service = UserService::new(pool);

        let result = service
            .update(
                other.id,
                UpdateUserRequest {
                    username: Some("ada".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_deleted_user_is_gone() {
        let pool = setup_test_db().await;
        let user = create_user(&pool, "ada@example.com", "ada", "secret1").await;
        let service = UserService::new(pool);

        service.delete(user.id).await.expect("Delete should succeed");

        assert!(matches!(service.get(user.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.delete(user.id).await, Err(AppError::NotFound(_))));
        assert!(service.list().await.expect("List should succeed").is_empty());
    }
}
