//! # Database Store
//!
//! Database connection pool, embedded migrations, and repository implementations.

// region: --- Modules
pub mod asset_repository;
pub mod models;
pub mod transaction_repository;
pub mod user_repository;
// endregion: --- Modules

// region: --- Re-exports
pub use asset_repository::AssetRepository;
pub use models::RecordState;
pub use transaction_repository::TransactionRepository;
pub use user_repository::UserRepository;
// endregion: --- Re-exports

// region: --- Types and Functions
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Type alias for SQLite connection pool.
pub type DbPool = SqlitePool;

/// Schema migrations, embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Create a new SQLite connection pool.
///
/// File databases are created (with their parent directory) if missing.
/// In-memory databases get a single long-lived connection so every query sees
/// the same data.
pub async fn create_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");

    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        SqlitePoolOptions::new().max_connections(5)
    };

    let pool = pool_options.connect_with(options).await?;

    Ok(pool)
}

/// Apply all pending migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}
// endregion: --- Types and Functions
