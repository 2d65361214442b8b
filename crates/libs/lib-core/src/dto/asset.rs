//! # Asset DTOs
//!
//! Create and sparse-update bodies for the asset endpoints, plus the
//! [`AssetInfo`] view that is also embedded in transaction responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::model::store::models::{Asset, AssetForCreate, AssetForUpdate};
use lib_utils::{validate_non_negative, validate_not_empty};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateAssetRequest {
    pub name: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
}

impl CreateAssetRequest {
    pub fn validate(&self) -> Result<()> {
        validate_not_empty(&self.name, "Name").map_err(AppError::InvalidInput)?;
        validate_not_empty(&self.symbol, "Symbol").map_err(AppError::InvalidInput)?;
        validate_not_empty(&self.asset_type, "Type").map_err(AppError::InvalidInput)?;
        validate_non_negative(self.price, "Price").map_err(AppError::InvalidInput)?;
        Ok(())
    }
}

impl From<CreateAssetRequest> for AssetForCreate {
    fn from(req: CreateAssetRequest) -> Self {
        Self {
            name: req.name,
            symbol: req.symbol,
            asset_type: req.asset_type,
            description: req.description,
            price: req.price,
        }
    }
}

/// Sparse asset update. `"price": 0` sets the price to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateAssetRequest {
    pub name: Option<String>,
    pub symbol: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub is_active: Option<bool>,
}

impl UpdateAssetRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate_not_empty(name, "Name").map_err(AppError::InvalidInput)?;
        }
        if let Some(symbol) = &self.symbol {
            validate_not_empty(symbol, "Symbol").map_err(AppError::InvalidInput)?;
        }
        if let Some(asset_type) = &self.asset_type {
            validate_not_empty(asset_type, "Type").map_err(AppError::InvalidInput)?;
        }
        if let Some(price) = self.price {
            validate_non_negative(price, "Price").map_err(AppError::InvalidInput)?;
        }
        Ok(())
    }
}

impl From<UpdateAssetRequest> for AssetForUpdate {
    fn from(req: UpdateAssetRequest) -> Self {
        Self {
            name: req.name,
            symbol: req.symbol,
            asset_type: req.asset_type,
            description: req.description,
            price: req.price,
            is_active: req.is_active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetInfo {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub description: String,
    pub price: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Asset> for AssetInfo {
    fn from(asset: &Asset) -> Self {
        Self {
            id: asset.id,
            name: asset.name.clone(),
            symbol: asset.symbol.clone(),
            asset_type: asset.asset_type.clone(),
            description: asset.description.clone(),
            price: asset.price,
            is_active: asset.is_active,
            created_at: asset.created_at,
            updated_at: asset.updated_at,
        }
    }
}

impl From<Asset> for AssetInfo {
    fn from(asset: Asset) -> Self {
        Self::from(&asset)
    }
}
