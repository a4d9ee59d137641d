//! Album repository.

use async_trait::async_trait;
use sqlx::PgPool;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::types::id::{AlbumId, AssetId};
use assethub_entity::album::Album;

/// Album row access needed around membership edits.
#[async_trait]
pub trait AlbumRepository: Send + Sync + 'static {
    /// Find an album by ID.
    async fn find_by_id(&self, album_id: AlbumId) -> AppResult<Option<Album>>;

    /// Bump `updated_at` to now.
    async fn touch(&self, album_id: AlbumId) -> AppResult<()>;

    /// Replace the album cover (`None` clears it).
    async fn set_thumbnail(&self, album_id: AlbumId, asset_id: Option<AssetId>) -> AppResult<()>;

    /// The album's most recently captured, non-trashed asset.
    async fn latest_asset_id(&self, album_id: AlbumId) -> AppResult<Option<AssetId>>;
}

/// PostgreSQL album repository.
#[derive(Debug, Clone)]
pub struct PgAlbumRepository {
    pool: PgPool,
}

impl PgAlbumRepository {
    /// Create a new album repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlbumRepository for PgAlbumRepository {
    async fn find_by_id(&self, album_id: AlbumId) -> AppResult<Option<Album>> {
        sqlx::query_as::<_, Album>("SELECT * FROM albums WHERE id = $1")
            .bind(album_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find album", e))
    }

    async fn touch(&self, album_id: AlbumId) -> AppResult<()> {
        sqlx::query("UPDATE albums SET updated_at = NOW() WHERE id = $1")
            .bind(album_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to touch album", e))?;
        Ok(())
    }

    async fn set_thumbnail(&self, album_id: AlbumId, asset_id: Option<AssetId>) -> AppResult<()> {
        sqlx::query("UPDATE albums SET album_thumbnail_asset_id = $2 WHERE id = $1")
            .bind(album_id)
            .bind(asset_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to set album thumbnail", e)
            })?;
        Ok(())
    }

    async fn latest_asset_id(&self, album_id: AlbumId) -> AppResult<Option<AssetId>> {
        sqlx::query_scalar::<_, AssetId>(
            "SELECT a.id FROM assets a \
             INNER JOIN albums_assets aa ON aa.asset_id = a.id \
             WHERE aa.album_id = $1 AND a.deleted_at IS NULL \
             ORDER BY a.file_created_at DESC, a.id DESC LIMIT 1",
        )
        .bind(album_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find latest album asset", e)
        })
    }
}
