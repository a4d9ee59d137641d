//! Access repository implementation.

use std::collections::HashSet;
use std::hash::Hash;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::traits::AccessRepository;
use assethub_core::types::id::{AlbumId, AssetId, SharedLinkId, UserId, to_uuids};
use assethub_core::types::role::AlbumUserRole;

/// Batched permission queries against PostgreSQL.
///
/// Every query takes the candidate ids as one array parameter and returns
/// the matching subset.
#[derive(Debug, Clone)]
pub struct PgAccessRepository {
    pool: PgPool,
}

impl PgAccessRepository {
    /// Create a new access repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run an id-filter query binding `subject` as `$1` and the candidates as `$2`.
    async fn filter<S, I>(
        &self,
        sql: &'static str,
        subject: S,
        ids: &HashSet<I>,
        what: &'static str,
    ) -> AppResult<HashSet<I>>
    where
        S: Into<Uuid> + Send,
        I: Copy + Eq + Hash + Into<Uuid> + From<Uuid> + Send + Sync,
    {
        let rows = sqlx::query_scalar::<_, Uuid>(sql)
            .bind(subject.into())
            .bind(to_uuids(ids.iter().copied()))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to check {what}"), e)
            })?;

        Ok(rows.into_iter().map(I::from).collect())
    }
}

#[async_trait]
impl AccessRepository for PgAccessRepository {
    async fn asset_owner_access(
        &self,
        user_id: UserId,
        asset_ids: &HashSet<AssetId>,
    ) -> AppResult<HashSet<AssetId>> {
        self.filter(
            "SELECT id FROM assets WHERE owner_id = $1 AND id = ANY($2)",
            user_id,
            asset_ids,
            "asset owner access",
        )
        .await
    }

    async fn asset_partner_access(
        &self,
        user_id: UserId,
        asset_ids: &HashSet<AssetId>,
    ) -> AppResult<HashSet<AssetId>> {
        self.filter(
            "SELECT a.id FROM partners p \
             INNER JOIN assets a ON a.owner_id = p.shared_by_id \
             WHERE p.shared_with_id = $1 AND a.is_archived = FALSE AND a.id = ANY($2)",
            user_id,
            asset_ids,
            "asset partner access",
        )
        .await
    }

    async fn asset_album_access(
        &self,
        user_id: UserId,
        asset_ids: &HashSet<AssetId>,
    ) -> AppResult<HashSet<AssetId>> {
        self.filter(
            "SELECT DISTINCT aa.asset_id FROM albums al \
             INNER JOIN albums_assets aa ON aa.album_id = al.id \
             LEFT JOIN album_users au ON au.album_id = al.id AND au.user_id = $1 \
             WHERE (al.owner_id = $1 OR au.user_id IS NOT NULL) AND aa.asset_id = ANY($2)",
            user_id,
            asset_ids,
            "asset album access",
        )
        .await
    }

    async fn asset_shared_link_access(
        &self,
        shared_link_id: SharedLinkId,
        asset_ids: &HashSet<AssetId>,
    ) -> AppResult<HashSet<AssetId>> {
        self.filter(
            "SELECT aa.asset_id FROM shared_links sl \
             INNER JOIN albums_assets aa ON aa.album_id = sl.album_id \
             WHERE sl.id = $1 AND aa.asset_id = ANY($2) \
             UNION \
             SELECT sla.asset_id FROM shared_link_assets sla \
             WHERE sla.shared_link_id = $1 AND sla.asset_id = ANY($2)",
            shared_link_id,
            asset_ids,
            "asset shared link access",
        )
        .await
    }

    async fn album_owner_access(
        &self,
        user_id: UserId,
        album_ids: &HashSet<AlbumId>,
    ) -> AppResult<HashSet<AlbumId>> {
        self.filter(
            "SELECT id FROM albums WHERE owner_id = $1 AND id = ANY($2)",
            user_id,
            album_ids,
            "album owner access",
        )
        .await
    }

    async fn album_shared_access(
        &self,
        user_id: UserId,
        album_ids: &HashSet<AlbumId>,
        minimum: AlbumUserRole,
    ) -> AppResult<HashSet<AlbumId>> {
        let roles: Vec<&str> = [AlbumUserRole::Editor, AlbumUserRole::Viewer]
            .iter()
            .filter(|role| role.has_at_least(&minimum))
            .map(|role| role.as_str())
            .collect();

        let rows = sqlx::query_scalar::<_, AlbumId>(
            "SELECT album_id FROM album_users \
             WHERE user_id = $1 AND album_id = ANY($2) AND role::text = ANY($3)",
        )
        .bind(user_id)
        .bind(to_uuids(album_ids.iter().copied()))
        .bind(roles)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check shared album access", e)
        })?;

        Ok(rows.into_iter().collect())
    }

    async fn album_shared_link_access(
        &self,
        shared_link_id: SharedLinkId,
        album_ids: &HashSet<AlbumId>,
    ) -> AppResult<HashSet<AlbumId>> {
        self.filter(
            "SELECT album_id FROM shared_links WHERE id = $1 AND album_id = ANY($2)",
            shared_link_id,
            album_ids,
            "album shared link access",
        )
        .await
    }

    async fn shared_link_owner_access(
        &self,
        user_id: UserId,
        shared_link_ids: &HashSet<SharedLinkId>,
    ) -> AppResult<HashSet<SharedLinkId>> {
        self.filter(
            "SELECT id FROM shared_links WHERE user_id = $1 AND id = ANY($2)",
            user_id,
            shared_link_ids,
            "shared link owner access",
        )
        .await
    }
}
