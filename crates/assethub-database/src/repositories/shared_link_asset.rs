//! Shared link membership repository.

use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::traits::BulkAssetRepository;
use assethub_core::types::id::{AssetId, SharedLinkId, to_uuids};

/// Reads and edits the `shared_link_assets` join table of individual links.
#[derive(Debug, Clone)]
pub struct PgSharedLinkAssetRepository {
    pool: PgPool,
}

impl PgSharedLinkAssetRepository {
    /// Create a new shared link membership repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BulkAssetRepository for PgSharedLinkAssetRepository {
    type ParentId = SharedLinkId;

    async fn get_asset_ids(
        &self,
        shared_link_id: SharedLinkId,
        asset_ids: &[AssetId],
    ) -> AppResult<HashSet<AssetId>> {
        if asset_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let rows = sqlx::query_scalar::<_, AssetId>(
            "SELECT asset_id FROM shared_link_assets \
             WHERE shared_link_id = $1 AND asset_id = ANY($2)",
        )
        .bind(shared_link_id)
        .bind(to_uuids(asset_ids.iter().copied()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to read shared link assets", e)
        })?;

        Ok(rows.into_iter().collect())
    }

    async fn add_asset_ids(
        &self,
        shared_link_id: SharedLinkId,
        asset_ids: &[AssetId],
    ) -> AppResult<()> {
        let result = sqlx::query(
            "INSERT INTO shared_link_assets (shared_link_id, asset_id) \
             SELECT $1, UNNEST($2::uuid[]) \
             ON CONFLICT (shared_link_id, asset_id) DO NOTHING",
        )
        .bind(shared_link_id)
        .bind(to_uuids(asset_ids.iter().copied()))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to add shared link assets", e)
        })?;

        debug!(
            shared_link_id = %shared_link_id,
            requested = asset_ids.len(),
            inserted = result.rows_affected(),
            "Shared link assets added"
        );
        Ok(())
    }

    async fn remove_asset_ids(
        &self,
        shared_link_id: SharedLinkId,
        asset_ids: &[AssetId],
    ) -> AppResult<()> {
        let result = sqlx::query(
            "DELETE FROM shared_link_assets WHERE shared_link_id = $1 AND asset_id = ANY($2)",
        )
        .bind(shared_link_id)
        .bind(to_uuids(asset_ids.iter().copied()))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to remove shared link assets", e)
        })?;

        debug!(
            shared_link_id = %shared_link_id,
            requested = asset_ids.len(),
            deleted = result.rows_affected(),
            "Shared link assets removed"
        );
        Ok(())
    }
}
