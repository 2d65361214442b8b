//! # Transaction DTOs
//!
//! Request bodies for the transaction endpoints and the denormalized
//! [`TransactionInfo`] view returned to clients.
//!
//! The caller never supplies `user_id`, `total_value` or (on create) `status`:
//! the owner comes from the bearer token, the total is derived, and new
//! transactions always start as `pending`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::{AssetInfo, UserInfo};
use crate::error::{AppError, Result};
use crate::model::store::models::{Transaction, TransactionStatus, TransactionType};
use lib_utils::validate_non_negative;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTransactionRequest {
    pub asset_id: i64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

impl CreateTransactionRequest {
    pub fn validate(&self) -> Result<()> {
        validate_non_negative(self.amount, "Amount").map_err(AppError::InvalidInput)?;
        validate_non_negative(self.price, "Price").map_err(AppError::InvalidInput)?;
        Ok(())
    }
}

/// Sparse transaction update.
///
/// Setting `amount` or `price` triggers recomputation of `total_value` from the
/// resulting stored pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateTransactionRequest {
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    pub amount: Option<f64>,
    pub price: Option<f64>,
    pub status: Option<TransactionStatus>,
    pub description: Option<String>,
}

impl UpdateTransactionRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(amount) = self.amount {
            validate_non_negative(amount, "Amount").map_err(AppError::InvalidInput)?;
        }
        if let Some(price) = self.price {
            validate_non_negative(price, "Price").map_err(AppError::InvalidInput)?;
        }
        Ok(())
    }
}

/// Transaction as returned to clients, with the owning user and the asset
/// embedded as they currently are. A deleted user or asset renders as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionInfo {
    pub id: i64,
    pub user_id: i64,
    pub asset_id: i64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub price: f64,
    pub total_value: f64,
    pub status: TransactionStatus,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: Option<UserInfo>,
    pub asset: Option<AssetInfo>,
}

impl TransactionInfo {
    pub fn new(tx: Transaction, user: Option<UserInfo>, asset: Option<AssetInfo>) -> Self {
        Self {
            id: tx.id,
            user_id: tx.user_id,
            asset_id: tx.asset_id,
            transaction_type: tx.transaction_type,
            amount: tx.amount,
            price: tx.price,
            total_value: tx.total_value,
            status: tx.status,
            description: tx.description,
            created_at: tx.created_at,
            updated_at: tx.updated_at,
            user,
            asset,
        }
    }
}
