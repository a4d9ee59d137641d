//! Asset repository.

use async_trait::async_trait;
use sqlx::PgPool;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::types::id::{AlbumId, AssetId, UserId, to_uuids};
use assethub_core::types::pagination::{PageRequest, Paginated};
use assethub_entity::asset::{Asset, AssetStats, AssetStatsOptions, AssetType};

/// Asset reads and bulk state changes.
#[async_trait]
pub trait AssetRepository: Send + Sync + 'static {
    /// Load the given assets (trashed ones included), in no particular order.
    async fn find_by_ids(&self, asset_ids: &[AssetId]) -> AppResult<Vec<Asset>>;

    /// One page of an album's non-trashed assets, newest capture first.
    async fn find_by_album_id(
        &self,
        page: PageRequest,
        album_id: AlbumId,
    ) -> AppResult<Paginated<Asset>>;

    /// Move assets to the trash. Returns the number of assets changed.
    async fn soft_delete_all(&self, asset_ids: &[AssetId]) -> AppResult<u64>;

    /// Take assets out of the trash. Returns the number of assets changed.
    async fn restore_all(&self, asset_ids: &[AssetId]) -> AppResult<u64>;

    /// Count an owner's visible assets by type.
    async fn get_statistics(
        &self,
        owner_id: UserId,
        options: AssetStatsOptions,
    ) -> AppResult<AssetStats>;
}

/// PostgreSQL asset repository.
#[derive(Debug, Clone)]
pub struct PgAssetRepository {
    pool: PgPool,
}

impl PgAssetRepository {
    /// Create a new asset repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssetRepository for PgAssetRepository {
    async fn find_by_ids(&self, asset_ids: &[AssetId]) -> AppResult<Vec<Asset>> {
        if asset_ids.is_empty() {
            return Ok(Vec::new());
        }

        sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE id = ANY($1)")
            .bind(to_uuids(asset_ids.iter().copied()))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find assets", e))
    }

    async fn find_by_album_id(
        &self,
        page: PageRequest,
        album_id: AlbumId,
    ) -> AppResult<Paginated<Asset>> {
        let rows = sqlx::query_as::<_, Asset>(
            "SELECT a.* FROM assets a \
             INNER JOIN albums_assets aa ON aa.asset_id = a.id \
             WHERE aa.album_id = $1 AND a.deleted_at IS NULL \
             ORDER BY a.file_created_at DESC, a.id DESC \
             LIMIT $2 OFFSET $3",
        )
        .bind(album_id)
        .bind(page.limit_with_lookahead())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list album assets", e)
        })?;

        Ok(Paginated::from_lookahead(rows, page.take))
    }

    async fn soft_delete_all(&self, asset_ids: &[AssetId]) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE assets SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = ANY($1) AND deleted_at IS NULL",
        )
        .bind(to_uuids(asset_ids.iter().copied()))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to trash assets", e))?;
        Ok(result.rows_affected())
    }

    async fn restore_all(&self, asset_ids: &[AssetId]) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE assets SET deleted_at = NULL, updated_at = NOW() \
             WHERE id = ANY($1) AND deleted_at IS NOT NULL",
        )
        .bind(to_uuids(asset_ids.iter().copied()))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to restore assets", e))?;
        Ok(result.rows_affected())
    }

    async fn get_statistics(
        &self,
        owner_id: UserId,
        options: AssetStatsOptions,
    ) -> AppResult<AssetStats> {
        let rows = sqlx::query_as::<_, (AssetType, i64)>(
            "SELECT asset_type, COUNT(*) FROM assets \
             WHERE owner_id = $1 AND is_visible = TRUE \
             AND ($2::boolean IS NULL OR is_archived = $2) \
             AND ($3::boolean IS NULL OR is_favorite = $3) \
             AND (CASE WHEN $4::boolean THEN deleted_at IS NOT NULL ELSE deleted_at IS NULL END) \
             GROUP BY asset_type",
        )
        .bind(owner_id)
        .bind(options.is_archived)
        .bind(options.is_favorite)
        .bind(options.is_trashed)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to compute asset statistics", e)
        })?;

        let mut stats = AssetStats::default();
        for (asset_type, count) in rows {
            stats.record(asset_type, count.max(0) as u64);
        }
        Ok(stats)
    }
}
