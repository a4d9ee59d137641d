//! Album membership repository.

use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::traits::BulkAssetRepository;
use assethub_core::types::id::{AlbumId, AssetId, to_uuids};

/// Reads and edits the `albums_assets` join table.
#[derive(Debug, Clone)]
pub struct PgAlbumAssetRepository {
    pool: PgPool,
}

impl PgAlbumAssetRepository {
    /// Create a new album membership repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BulkAssetRepository for PgAlbumAssetRepository {
    type ParentId = AlbumId;

    async fn get_asset_ids(
        &self,
        album_id: AlbumId,
        asset_ids: &[AssetId],
    ) -> AppResult<HashSet<AssetId>> {
        if asset_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let rows = sqlx::query_scalar::<_, AssetId>(
            "SELECT asset_id FROM albums_assets WHERE album_id = $1 AND asset_id = ANY($2)",
        )
        .bind(album_id)
        .bind(to_uuids(asset_ids.iter().copied()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to read album assets", e)
        })?;

        Ok(rows.into_iter().collect())
    }

    async fn add_asset_ids(&self, album_id: AlbumId, asset_ids: &[AssetId]) -> AppResult<()> {
        let result = sqlx::query(
            "INSERT INTO albums_assets (album_id, asset_id) \
             SELECT $1, UNNEST($2::uuid[]) \
             ON CONFLICT (album_id, asset_id) DO NOTHING",
        )
        .bind(album_id)
        .bind(to_uuids(asset_ids.iter().copied()))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add album assets", e))?;

        debug!(
            album_id = %album_id,
            requested = asset_ids.len(),
            inserted = result.rows_affected(),
            "Album assets added"
        );
        Ok(())
    }

    async fn remove_asset_ids(&self, album_id: AlbumId, asset_ids: &[AssetId]) -> AppResult<()> {
        let result =
            sqlx::query("DELETE FROM albums_assets WHERE album_id = $1 AND asset_id = ANY($2)")
                .bind(album_id)
                .bind(to_uuids(asset_ids.iter().copied()))
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to remove album assets", e)
                })?;

        debug!(
            album_id = %album_id,
            requested = asset_ids.len(),
            deleted = result.rows_affected(),
            "Album assets removed"
        );
        Ok(())
    }
}
