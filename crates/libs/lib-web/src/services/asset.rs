//! # Asset Service
//!
//! Asset CRUD. Symbols are unique across all assets, deleted ones included.

use lib_core::dto::{AssetInfo, CreateAssetRequest, UpdateAssetRequest};
use lib_core::model::store::AssetRepository;
use lib_core::{DbPool, Result};
use tracing::{info, instrument};

use super::{not_found, stale_write, unique_conflict};

const ENTITY: &str = "Asset";
const SYMBOL_TAKEN: &str = "An asset with this symbol already exists";

#[derive(Clone)]
pub struct AssetService {
    db: DbPool,
}

impl AssetService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<AssetInfo>> {
        let assets = AssetRepository::list(&self.db).await?;
        Ok(assets.into_iter().map(AssetInfo::from).collect())
    }

    pub async fn get(&self, id: i64) -> Result<AssetInfo> {
        AssetRepository::find_by_id(&self.db, id)
            .await?
            .map(AssetInfo::from)
            .ok_or_else(|| not_found(ENTITY))
    }

    #[instrument(skip(self, req), fields(symbol = %req.symbol))]
    pub async fn create(&self, req: CreateAssetRequest) -> Result<AssetInfo> {
        req.validate()?;

        let asset = AssetRepository::create(&self.db, req.into())
            .await
            .map_err(|e| unique_conflict(e, SYMBOL_TAKEN))?;

        info!("[ASSET] Created asset {} ({})", asset.id, asset.symbol);
        Ok(AssetInfo::from(asset))
    }

    #[instrument(skip(self, req))]
    pub async fn update(&self, id: i64, req: UpdateAssetRequest) -> Result<AssetInfo> {
        req.validate()?;

        let current = AssetRepository::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| not_found(ENTITY))?;

        let updated = AssetRepository::update(&self.db, id, current.version, req.into())
            .await
            .map_err(|e| unique_conflict(e, SYMBOL_TAKEN))?;

        match updated {
            Some(asset) => {
                info!("[ASSET] Updated asset {} (version {})", asset.id, asset.version);
                Ok(AssetInfo::from(asset))
            }
            None => {
                let still_exists = AssetRepository::find_by_id(&self.db, id).await?.is_some();
                Err(stale_write(ENTITY, still_exists))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<()> {
        if !AssetRepository::soft_delete(&self.db, id).await? {
            return Err(not_found(ENTITY));
        }
        info!("[ASSET] Deleted asset {}", id);
        Ok(())
    }
}
