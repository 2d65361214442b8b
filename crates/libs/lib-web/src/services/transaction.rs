//! # Transaction Service
//!
//! The transaction engine: validates requests against existing assets, derives
//! `total_value`, persists transactions and returns them with their user and
//! asset snapshots embedded.
//!
//! ## Valuation
//!
//! `total_value = amount * price`, plain `f64` multiplication with no rounding.
//! It is never taken from the caller. On update, if `amount` or `price` is
//! present the total is recomputed from the pair the row will hold afterwards
//! (a price-only change reuses the stored amount).
//!
//! ## Concurrency
//!
//! Updates are written against the `version` that was read. Because the new
//! total is computed from that same version, a concurrent change to `amount`
//! or `price` cannot slip in between: the conditional write fails instead and
//! the caller gets a `409 Conflict`.
//!
//! ## Errors
//!
//! - `AppError::InvalidInput` - negative or non-finite amount/price, or a total that overflows
//! - `AppError::NotFound` - unknown transaction, or unknown/deleted asset on create
//! - `AppError::Unauthorized` - the authenticated user no longer exists
//! - `AppError::Conflict` - lost an update race

use std::collections::HashMap;

use lib_core::dto::{
    AssetInfo, CreateTransactionRequest, TransactionInfo, UpdateTransactionRequest, UserInfo,
};
use lib_core::model::store::models::{Transaction, TransactionForCreate, TransactionForUpdate};
use lib_core::model::store::{AssetRepository, TransactionRepository, UserRepository};
use lib_core::{AppError, DbPool, Result};
use tracing::{debug, info, instrument, warn};

use super::{not_found, stale_write};

const ENTITY: &str = "Transaction";

/// Value of a position: `amount * price`.
pub fn compute_total(amount: f64, price: f64) -> f64 {
    amount * price
}

/// [`compute_total`], rejecting a product that is not a finite number.
fn checked_total(amount: f64, price: f64) -> Result<f64> {
    let total = compute_total(amount, price);
    if !total.is_finite() {
        warn!("[TRANSACTION] {} x {} overflows", amount, price);
        return Err(AppError::InvalidInput("Total value is out of range".to_string()));
    }
    Ok(total)
}

/// Turn a sparse update request into the row change to write over `current`.
///
/// Only present fields are copied. `total_value` is set exactly when `amount`
/// or `price` is present.
pub fn plan_update(
    current: &Transaction,
    req: UpdateTransactionRequest,
) -> Result<TransactionForUpdate> {
    let total_value = if req.amount.is_some() || req.price.is_some() {
        let amount = req.amount.unwrap_or(current.amount);
        let price = req.price.unwrap_or(current.price);
        Some(checked_total(amount, price)?)
    } else {
        None
    };

    Ok(TransactionForUpdate {
        transaction_type: req.transaction_type,
        amount: req.amount,
        price: req.price,
        total_value,
        status: req.status,
        description: req.description,
    })
}

#[derive(Clone)]
pub struct TransactionService {
    db: DbPool,
}

impl TransactionService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// Record a new pending transaction owned by `user_id`.
    #[instrument(skip(self, req), fields(asset_id = req.asset_id, tx_type = %req.transaction_type))]
    pub async fn create(&self, user_id: i64, req: CreateTransactionRequest) -> Result<TransactionInfo> {
        req.validate()?;

        let asset = AssetRepository::find_by_id(&self.db, req.asset_id)
            .await?
            .ok_or_else(|| {
                warn!("[TRANSACTION] Asset {} not found", req.asset_id);
                AppError::NotFound("The specified asset does not exist".to_string())
            })?;

        let user = UserRepository::find_by_id(&self.db, user_id)
            .await?
            .ok_or_else(|| {
                warn!("[TRANSACTION] Token subject {} has no active account", user_id);
                AppError::Unauthorized("User ID not found in token".to_string())
            })?;

        let total_value = checked_total(req.amount, req.price)?;
        debug!(
            "[TRANSACTION] {} x {} = {}",
            req.amount, req.price, total_value
        );

        let tx = TransactionRepository::create(
            &self.db,
            TransactionForCreate {
                user_id: user.id,
                asset_id: asset.id,
                transaction_type: req.transaction_type,
                amount: req.amount,
                price: req.price,
                total_value,
                description: req.description,
            },
        )
        .await?;

        info!(
            "[TRANSACTION] Created transaction {} for user {} on asset {}",
            tx.id, tx.user_id, tx.asset_id
        );

        self.hydrate(tx).await
    }

    pub async fn get(&self, id: i64) -> Result<TransactionInfo> {
        let tx = TransactionRepository::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| not_found(ENTITY))?;

        self.hydrate(tx).await
    }

    /// All active transactions with snapshots. Each user and asset is loaded once.
    pub async fn list(&self) -> Result<Vec<TransactionInfo>> {
        let txs = TransactionRepository::list(&self.db).await?;

        let mut users: HashMap<i64, Option<UserInfo>> = HashMap::new();
        let mut assets: HashMap<i64, Option<AssetInfo>> = HashMap::new();
        let mut result = Vec::with_capacity(txs.len());

        for tx in txs {
            if !users.contains_key(&tx.user_id) {
                let user = UserRepository::find_by_id(&self.db, tx.user_id).await?;
                users.insert(tx.user_id, user.map(UserInfo::from));
            }
            if !assets.contains_key(&tx.asset_id) {
                let asset = AssetRepository::find_by_id(&self.db, tx.asset_id).await?;
                assets.insert(tx.asset_id, asset.map(AssetInfo::from));
            }

            let user = users.get(&tx.user_id).cloned().flatten();
            let asset = assets.get(&tx.asset_id).cloned().flatten();
            result.push(TransactionInfo::new(tx, user, asset));
        }

        Ok(result)
    }

    /// Apply a sparse update, recomputing `total_value` when amount or price changes.
    #[instrument(skip(self, req))]
    pub async fn update(&self, id: i64, req: UpdateTransactionRequest) -> Result<TransactionInfo> {
        req.validate()?;

        let current = TransactionRepository::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| not_found(ENTITY))?;

        let change = plan_update(&current, req)?;

        match TransactionRepository::update(&self.db, id, current.version, change).await? {
            Some(tx) => {
                info!(
                    "[TRANSACTION] Updated transaction {} (version {}, total {})",
                    tx.id, tx.version, tx.total_value
                );
                self.hydrate(tx).await
            }
            None => {
                let still_exists = TransactionRepository::find_by_id(&self.db, id)
                    .await?
                    .is_some();
                warn!("[TRANSACTION] Versioned write missed transaction {}", id);
                Err(stale_write(ENTITY, still_exists))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<()> {
        if !TransactionRepository::soft_delete(&self.db, id).await? {
            return Err(not_found(ENTITY));
        }
        info!("[TRANSACTION] Deleted transaction {}", id);
        Ok(())
    }

    /// Attach the current user and asset snapshots. Deleted references become `None`.
    async fn hydrate(&self, tx: Transaction) -> Result<TransactionInfo> {
        let user = UserRepository::find_by_id(&self.db, tx.user_id).await?;
        let asset = AssetRepository::find_by_id(&self.db, tx.asset_id).await?;

        Ok(TransactionInfo::new(
            tx,
            user.map(UserInfo::from),
            asset.map(AssetInfo::from),
        ))
    }
}
