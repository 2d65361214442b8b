//! # Asset Handlers
//!
//! CRUD over the asset catalogue. Symbols are unique; a duplicate is `409`.

#[cfg(test)]
mod tests;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use lib_core::dto::{AssetInfo, CreateAssetRequest, MessageResponse, UpdateAssetRequest};
use lib_core::{DbPool, Result};
use tracing::instrument;

use crate::extract::{parse_id, ValidJson};
use crate::services::AssetService;

const ENTITY: &str = "Asset";

pub async fn list_assets(State(pool): State<DbPool>) -> Result<Json<Vec<AssetInfo>>> {
    let assets = AssetService::new(pool).list().await?;
    Ok(Json(assets))
}

pub async fn get_asset(
    State(pool): State<DbPool>,
    Path(id): Path<String>,
) -> Result<Json<AssetInfo>> {
    let id = parse_id(&id, ENTITY)?;
    let asset = AssetService::new(pool).get(id).await?;
    Ok(Json(asset))
}

#[instrument(skip(pool, req), fields(symbol = %req.symbol))]
pub async fn create_asset(
    State(pool): State<DbPool>,
    ValidJson(req): ValidJson<CreateAssetRequest>,
) -> Result<(StatusCode, Json<AssetInfo>)> {
    let asset = AssetService::new(pool).create(req).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

#[instrument(skip(pool, req))]
pub async fn update_asset(
    State(pool): State<DbPool>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateAssetRequest>,
) -> Result<Json<AssetInfo>> {
    let id = parse_id(&id, ENTITY)?;
    let asset = AssetService::new(pool).update(id, req).await?;
    Ok(Json(asset))
}

#[instrument(skip(pool))]
pub async fn delete_asset(
    State(pool): State<DbPool>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id(&id, ENTITY)?;
    AssetService::new(pool).delete(id).await?;
    Ok(Json(MessageResponse::new("Asset deleted successfully")))
}
