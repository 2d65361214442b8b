//! # Transaction Handlers
//!
//! HTTP surface of the transaction engine.
//!
//! ## Ownership
//!
//! The owner of a new transaction is always the authenticated caller taken from
//! [`CurrentUser`]. A `user_id` in the request body is ignored, and
//! `total_value` is never accepted from the client.
//!
//! ## Responses
//!
//! Every transaction is returned with `user` and `asset` snapshots embedded:
//!
//! ```text
//! {
//!   "id": 1, "user_id": 1, "asset_id": 1, "type": "buy",
//!   "amount": 0.5, "price": 50000.0, "total_value": 25000.0,
//!   "status": "pending", "description": "",
//!   "user": { "id": 1, "username": "abc", ... },
//!   "asset": { "id": 1, "symbol": "BTC", ... }
//! }
//! ```

#[cfg(test)]
mod tests;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use lib_core::dto::{
    CreateTransactionRequest, MessageResponse, TransactionInfo, UpdateTransactionRequest,
};
use lib_core::{DbPool, Result};
use tracing::{debug, instrument};

use crate::extract::{parse_id, ValidJson};
use crate::middleware::CurrentUser;
use crate::services::TransactionService;

const ENTITY: &str = "Transaction";

pub async fn list_transactions(State(pool): State<DbPool>) -> Result<Json<Vec<TransactionInfo>>> {
    let txs = TransactionService::new(pool).list().await?;
    debug!("[TRANSACTION] Listing {} transactions", txs.len());
    Ok(Json(txs))
}

pub async fn get_transaction(
    State(pool): State<DbPool>,
    Path(id): Path<String>,
) -> Result<Json<TransactionInfo>> {
    let id = parse_id(&id, ENTITY)?;
    let tx = TransactionService::new(pool).get(id).await?;
    Ok(Json(tx))
}

/// Record a transaction for the caller.
///
/// # Returns
///
/// * `201 Created` with the transaction, status `pending`
/// * `400` - Negative or malformed amount/price, unknown type
/// * `404` - Asset does not exist
#[instrument(skip(pool, current, req), fields(user_id = current.user_id))]
pub async fn create_transaction(
    State(pool): State<DbPool>,
    current: CurrentUser,
    ValidJson(req): ValidJson<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<TransactionInfo>)> {
    let tx = TransactionService::new(pool)
        .create(current.user_id, req)
        .await?;
    Ok((StatusCode::CREATED, Json(tx)))
}

/// Sparse update. `total_value` is recomputed when `amount` or `price` is sent.
#[instrument(skip(pool, current, req), fields(caller = current.user_id))]
pub async fn update_transaction(
    State(pool): State<DbPool>,
    current: CurrentUser,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateTransactionRequest>,
) -> Result<Json<TransactionInfo>> {
    let id = parse_id(&id, ENTITY)?;
    let tx = TransactionService::new(pool).update(id, req).await?;
    Ok(Json(tx))
}

#[instrument(skip(pool, current), fields(caller = current.user_id))]
pub async fn delete_transaction(
    State(pool): State<DbPool>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id(&id, ENTITY)?;
    TransactionService::new(pool).delete(id).await?;
    Ok(Json(MessageResponse::new("Transaction deleted successfully")))
}
