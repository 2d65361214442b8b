//! # Transaction Repository
//!
//! Persistence for asset transactions. The repository stores what it is given;
//! `total_value` and the asset existence check belong to the transaction service.

use super::models::{Transaction, TransactionForCreate, TransactionForUpdate, TransactionStatus};
use super::DbPool;
use chrono::Utc;
use sqlx::{query_as, QueryBuilder, Sqlite};

pub struct TransactionRepository;

impl TransactionRepository {
    /// Insert a new transaction with status `pending`.
    ///
    /// Single-statement insert: either the full row is visible or nothing is.
    pub async fn create(
        pool: &DbPool,
        tx_data: TransactionForCreate,
    ) -> Result<Transaction, sqlx::Error> {
        let now = Utc::now();

        query_as::<_, Transaction>(
            "INSERT INTO transactions
                (user_id, asset_id, transaction_type, amount, price, total_value, status, description, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(tx_data.user_id)
        .bind(tx_data.asset_id)
        .bind(tx_data.transaction_type.as_str())
        .bind(tx_data.amount)
        .bind(tx_data.price)
        .bind(tx_data.total_value)
        .bind(TransactionStatus::Pending.as_str())
        .bind(tx_data.description)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<Transaction>, sqlx::Error> {
        query_as::<_, Transaction>("SELECT * FROM transactions WHERE id = ? AND state = 'active'")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &DbPool) -> Result<Vec<Transaction>, sqlx::Error> {
        query_as::<_, Transaction>("SELECT * FROM transactions WHERE state = 'active' ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Conditional update guarded by `expected_version`.
    ///
    /// Returns `Ok(None)` when no active transaction is at that version.
    pub async fn update(
        pool: &DbPool,
        id: i64,
        expected_version: i64,
        tx_data: TransactionForUpdate,
    ) -> Result<Option<Transaction>, sqlx::Error> {
        if tx_data.is_empty() {
            return query_as::<_, Transaction>(
                "SELECT * FROM transactions WHERE id = ? AND version = ? AND state = 'active'",
            )
            .bind(id)
            .bind(expected_version)
            .fetch_optional(pool)
            .await;
        }

        let mut query = QueryBuilder::<Sqlite>::new("UPDATE transactions SET ");
        let mut updates = query.separated(", ");

        if let Some(transaction_type) = tx_data.transaction_type {
            updates
                .push("transaction_type = ")
                .push_bind_unseparated(transaction_type.as_str());
        }
        if let Some(amount) = tx_data.amount {
            updates.push("amount = ").push_bind_unseparated(amount);
        }
        if let Some(price) = tx_data.price {
            updates.push("price = ").push_bind_unseparated(price);
        }
        if let Some(total_value) = tx_data.total_value {
            updates.push("total_value = ").push_bind_unseparated(total_value);
        }
        if let Some(status) = tx_data.status {
            updates.push("status = ").push_bind_unseparated(status.as_str());
        }
        if let Some(description) = tx_data.description {
            updates.push("description = ").push_bind_unseparated(description);
        }
        updates.push("version = version + 1");
        updates.push("updated_at = ").push_bind_unseparated(Utc::now());

        query
            .push(" WHERE id = ")
            .push_bind(id)
            .push(" AND version = ")
            .push_bind(expected_version)
            .push(" AND state = 'active' RETURNING *");

        query.build_query_as::<Transaction>().fetch_optional(pool).await
    }

    /// Tombstone a transaction. Returns `false` if there was no active transaction with that ID.
    pub async fn soft_delete(pool: &DbPool, id: i64) -> Result<bool, sqlx::Error> {
        let now = Utc::now();

        let result = sqlx::query(
            "UPDATE transactions
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
