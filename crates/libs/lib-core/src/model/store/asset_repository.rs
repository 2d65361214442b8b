//! # Asset Repository
//!
//! Database access for assets. Transactions look assets up here to check that
//! the referenced asset exists.

use super::models::{Asset, AssetForCreate, AssetForUpdate};
use super::DbPool;
use chrono::Utc;
use sqlx::{query_as, QueryBuilder, Sqlite};

pub struct AssetRepository;

impl AssetRepository {
    /// Create a new active asset.
    ///
    /// Fails with a UNIQUE violation if the symbol is taken (including by a deleted asset).
    pub async fn create(pool: &DbPool, asset_data: AssetForCreate) -> Result<Asset, sqlx::Error> {
        let now = Utc::now();

        query_as::<_, Asset>(
            "INSERT INTO assets (name, symbol, asset_type, description, price, is_active, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, 1, ?, ?)
             RETURNING *",
        )
        .bind(asset_data.name)
        .bind(asset_data.symbol)
        .bind(asset_data.asset_type)
        .bind(asset_data.description)
        .bind(asset_data.price)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await
    }

    /// Find an active asset by ID.
    pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<Asset>, sqlx::Error> {
        query_as::<_, Asset>("SELECT * FROM assets WHERE id = ? AND state = 'active'")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &DbPool) -> Result<Vec<Asset>, sqlx::Error> {
        query_as::<_, Asset>("SELECT * FROM assets WHERE state = 'active' ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Conditional update guarded by `expected_version`.
    ///
    /// Returns `Ok(None)` when no active asset is at that version.
    pub async fn update(
        pool: &DbPool,
        id: i64,
        expected_version: i64,
        asset_data: AssetForUpdate,
    ) -> Result<Option<Asset>, sqlx::Error> {
        if asset_data.is_empty() {
            return query_as::<_, Asset>(
                "SELECT * FROM assets WHERE id = ? AND version = ? AND state = 'active'",
            )
            .bind(id)
            .bind(expected_version)
            .fetch_optional(pool)
            .await;
        }

        let mut query = QueryBuilder::<Sqlite>::new("UPDATE assets SET ");
        let mut updates = query.separated(", ");

        if let Some(name) = asset_data.name {
            updates.push("name = ").push_bind_unseparated(name);
        }
        if let Some(symbol) = asset_data.symbol {
            updates.push("symbol = ").push_bind_unseparated(symbol);
        }
        if let Some(asset_type) = asset_data.asset_type {
            updates.push("asset_type = ").push_bind_unseparated(asset_type);
        }
        if let Some(description) = asset_data.description {
            updates.push("description = ").push_bind_unseparated(description);
        }
        if let Some(price) = asset_data.price {
            updates.push("price = ").push_bind_unseparated(price);
        }
        if let Some(is_active) = asset_data.is_active {
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

        query.build_query_as::<Asset>().fetch_optional(pool).await
    }

    /// Tombstone an asset. Returns `false` if there was no active asset with that ID.
    pub async fn soft_delete(pool: &DbPool, id: i64) -> Result<bool, sqlx::Error> {
        let now = Utc::now();

        let result = sqlx::query(
            "UPDATE assets
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
