//! # User Repository
//!
//! Provides database access layer for user-related operations.
//!
//! This module implements the repository pattern for user data access,
//! providing a clean abstraction over SQL queries. Only `active` rows are ever
//! returned; deleted users stay in the table as tombstones.
//!
//! ## Example
//!
//! ```rust,no_run
//! # use lib_core::model::store::{create_pool, run_migrations, UserRepository};
//! # use lib_core::model::store::models::UserForCreate;
//! # async fn example() -> anyhow::Result<()> {
//! let pool = create_pool("sqlite::memory:").await?;
//! run_migrations(&pool).await?;
//!
//! let user = UserRepository::create(&pool, UserForCreate {
//!     email: "alice@example.com".to_string(),
//!     username: "alice".to_string(),
//!     password_hash: "$argon2id$...".to_string(),
//!     first_name: String::new(),
//!     last_name: String::new(),
//! }).await?;
//!
//! let found = UserRepository::find_by_email(&pool, "alice@example.com").await?;
//! assert_eq!(found.map(|u| u.id), Some(user.id));
//! # Ok(())
//! # }
//! ```

use super::models::{User, UserForCreate, UserForUpdate};
use super::DbPool;
use chrono::Utc;
use sqlx::{query_as, QueryBuilder, Sqlite};

/// User repository for database operations.
///
/// Provides methods for creating, retrieving, updating, and soft-deleting user records.
/// All methods are async and return `Result` types for proper error handling.
pub struct UserRepository;

impl UserRepository {
    /// Create a new user in the database.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The newly created user with generated ID, version 1 and timestamps
    /// * `Err(sqlx::Error)` - Database error (e.g., constraint violation for duplicate email/username)
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if:
    /// - Username already exists (UNIQUE constraint violation)
    /// - Email already exists (UNIQUE constraint violation)
    /// - Database connection fails
    pub async fn create(pool: &DbPool, user_data: UserForCreate) -> Result<User, sqlx::Error> {
        let now = Utc::now();

        query_as::<_, User>(
            "INSERT INTO users (email, username, password_hash, first_name, last_name, is_active, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, 1, ?, ?)
             RETURNING *",
        )
        .bind(user_data.email)
        .bind(user_data.username)
        .bind(user_data.password_hash)
        .bind(user_data.first_name)
        .bind(user_data.last_name)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await
    }

    /// Find an active user by ID.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(User))` - Active user found
    /// * `Ok(None)` - No such user, or the user was deleted
    /// * `Err(sqlx::Error)` - Database error occurred
    pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<User>, sqlx::Error> {
        query_as::<_, User>("SELECT * FROM users WHERE id = ? AND state = 'active'")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active user by their email address.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(User))` - User found with matching email
    /// * `Ok(None)` - No user found with that email
    /// * `Err(sqlx::Error)` - Database error occurred
    pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        query_as::<_, User>("SELECT * FROM users WHERE email = ? AND state = 'active'")
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find an active user whose email OR username matches.
    ///
    /// Used as the single combined existence check at registration, so callers
    /// cannot tell which of the two fields collided.
    pub async fn find_by_email_or_username(
        pool: &DbPool,
        email: &str,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        query_as::<_, User>(
            "SELECT * FROM users WHERE (email = ? OR username = ?) AND state = 'active' LIMIT 1",
        )
        .bind(email)
        .bind(username)
        .fetch_optional(pool)
        .await
    }

    /// List all active users ordered by ID.
    pub async fn list(pool: &DbPool) -> Result<Vec<User>, sqlx::Error> {
        query_as::<_, User>("SELECT * FROM users WHERE state = 'active' ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Update an existing user if it is still at `expected_version`.
    ///
    /// Only the fields set in `user_data` are written. A successful write bumps
    /// `version` and `updated_at`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(User))` - The updated user
    /// * `Ok(None)` - No active user at that version (deleted, missing, or modified concurrently)
    /// * `Err(sqlx::Error)` - Database error (e.g., UNIQUE violation on email/username)
    pub async fn update(
        pool: &DbPool,
        id: i64,
        expected_version: i64,
        user_data: UserForUpdate,
    ) -> Result<Option<User>, sqlx::Error> {
        if user_data.is_empty() {
            return query_as::<_, User>(
                "SELECT * FROM users WHERE id = ? AND version = ? AND state = 'active'",
            )
            .bind(id)
            .bind(expected_version)
            .fetch_optional(pool)
            .await;
        }

        let mut query = QueryBuilder::<Sqlite>::new("UPDATE users SET ");
        let mut updates = query.separated(", ");

        if let Some(email) = user_data.email {
            updates.push("email = ").push_bind_unseparated(email);
        }
        if let Some(username) = user_data.username {
            updates.push("username = ").push_bind_unseparated(username);
        }
        if let Some(first_name) = user_data.first_name {
            updates.push("first_name = ").push_bind_unseparated(first_name);
        }
        if let Some(last_name) = user_data.last_name {
            updates.push("last_name = ").push_bind_unseparated(last_name);
        }
        if let Some(is_active) = user_data.is_active {
            updates.push("is_active = ").push_bind_unseparated(is_active);
        }
        updates.push("version = version + 1");
        updates.push("updated_at = ").push_bind_unseparated(Utc::now());

        query
            .push(" WHERE id = ")
            .push_bind(id)
            .push(" AND version = ")
            .push_bind(expected_version)
            .push(" AND state = 'active' RETURNING *");

        query.build_query_as::<User>().fetch_optional(pool).await
    }

    /// Tombstone a user.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The user was active and is now deleted
    /// * `Ok(false)` - No active user with that ID
    pub async fn soft_delete(pool: &DbPool, id: i64) -> Result<bool, sqlx::Error> {
        let now = Utc::now();

        let result = sqlx::query(
            "UPDATE users
             SET state = 'deleted', deleted_at = ?, updated_at = ?, version = version + 1
             WHERE id = ? AND state = 'active'",
        )
        .bind(now)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
