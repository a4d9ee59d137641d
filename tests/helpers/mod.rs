//! Shared helpers for the PostgreSQL integration tests.
//!
//! Tests connect to `ASSETHUB_TEST_DATABASE_URL`, apply `schema/schema.sql`,
//! and seed rows with fresh random ids so they can run side by side.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;

use assethub_auth::AccessCore;
use assethub_core::config::DatabaseConfig;
use assethub_core::types::id::{AlbumId, AssetId, SharedLinkId, UserId};
use assethub_database::DatabasePool;
use assethub_database::repositories::{
    PgAccessRepository, PgAlbumAssetRepository, PgAlbumRepository, PgAssetRepository,
    PgSharedLinkAssetRepository, PgSharedLinkRepository,
};
use assethub_service::{AlbumService, AssetService, SharedLinkService};

const SCHEMA: &str = include_str!("../../schema/schema.sql");
const SCHEMA_LOCK: i64 = 0x6173_7365_7468;

/// Test database context
pub struct TestDb {
    /// Database pool lifecycle object
    pub db: DatabasePool,
}

impl TestDb {
    /// Connect and make sure the schema exists
    pub async fn new() -> Self {
        let url = std::env::var("ASSETHUB_TEST_DATABASE_URL")
            .expect("ASSETHUB_TEST_DATABASE_URL must be set for integration tests");
        let config = DatabaseConfig {
            url: Some(url),
            max_connections: 5,
            ..DatabaseConfig::default()
        };
        let db = DatabasePool::connect(&config)
            .await
            .expect("Failed to connect to test database");

        let mut conn = db.pool().acquire().await.expect("Failed to acquire connection");
        sqlx::query("SELECT pg_advisory_lock($1)")
            .bind(SCHEMA_LOCK)
            .execute(&mut *conn)
            .await
            .expect("Failed to take schema lock");
        sqlx::raw_sql(SCHEMA)
            .execute(&mut *conn)
            .await
            .expect("Failed to apply schema");
        sqlx::query("SELECT pg_advisory_unlock($1)")
            .bind(SCHEMA_LOCK)
            .execute(&mut *conn)
            .await
            .expect("Failed to release schema lock");

        Self { db }
    }

    /// Raw pool for direct queries
    pub fn pool(&self) -> &PgPool {
        self.db.pool()
    }

    /// Access gate over the PostgreSQL access repository
    pub fn access(&self) -> Arc<AccessCore> {
        Arc::new(AccessCore::new(Arc::new(PgAccessRepository::new(
            self.pool().clone(),
        ))))
    }

    /// Album service wired to PostgreSQL
    pub fn album_service(&self) -> AlbumService {
        let pool = self.pool().clone();
        AlbumService::new(
            self.access(),
            Arc::new(PgAlbumRepository::new(pool.clone())),
            Arc::new(PgAssetRepository::new(pool.clone())),
            Arc::new(PgAlbumAssetRepository::new(pool)),
        )
    }

    /// Shared link service wired to PostgreSQL
    pub fn shared_link_service(&self) -> SharedLinkService {
        let pool = self.pool().clone();
        SharedLinkService::new(
            self.access(),
            Arc::new(PgSharedLinkRepository::new(pool.clone())),
            Arc::new(PgSharedLinkAssetRepository::new(pool)),
        )
    }

    /// Asset service wired to PostgreSQL
    pub fn asset_service(&self) -> AssetService {
        AssetService::new(
            self.access(),
            Arc::new(PgAssetRepository::new(self.pool().clone())),
        )
    }

    /// Insert a user
    pub async fn create_user(&self) -> UserId {
        let id = UserId::new();
        sqlx::query("INSERT INTO users (id, email, name) VALUES ($1, $2, 'Test User')")
            .bind(id)
            .bind(format!("{id}@example.test"))
            .execute(self.pool())
            .await
            .expect("Failed to create user");
        id
    }

    /// Let `shared_with` see the library of `shared_by`
    pub async fn create_partner(&self, shared_by: UserId, shared_with: UserId) {
        sqlx::query("INSERT INTO partners (shared_by_id, shared_with_id) VALUES ($1, $2)")
            .bind(shared_by)
            .bind(shared_with)
            .execute(self.pool())
            .await
            .expect("Failed to create partner");
    }

    /// Insert an image captured `age_days` ago
    pub async fn create_asset(&self, owner_id: UserId, age_days: i64) -> AssetId {
        let id = AssetId::new();
        let taken: DateTime<Utc> = Utc::now() - Duration::days(age_days);
        sqlx::query(
            "INSERT INTO assets (id, owner_id, asset_type, original_path, file_created_at) \
             VALUES ($1, $2, 'image', $3, $4)",
        )
        .bind(id)
        .bind(owner_id)
        .bind(format!("/upload/{id}.jpg"))
        .bind(taken)
        .execute(self.pool())
        .await
        .expect("Failed to create asset");
        id
    }

    /// Insert an album
    pub async fn create_album(&self, owner_id: UserId) -> AlbumId {
        let id = AlbumId::new();
        sqlx::query("INSERT INTO albums (id, owner_id, album_name) VALUES ($1, $2, 'Test Album')")
            .bind(id)
            .bind(owner_id)
            .execute(self.pool())
            .await
            .expect("Failed to create album");
        id
    }

    /// Share an album with a user under the given role
    pub async fn share_album(&self, album_id: AlbumId, user_id: UserId, role: &str) {
        sqlx::query(
            "INSERT INTO album_users (album_id, user_id, role) \
             VALUES ($1, $2, $3::album_user_role)",
        )
        .bind(album_id)
        .bind(user_id)
        .bind(role)
        .execute(self.pool())
        .await
        .expect("Failed to share album");
    }

    /// Insert a shared link; an album link when `album_id` is set
    pub async fn create_shared_link(
        &self,
        user_id: UserId,
        album_id: Option<AlbumId>,
    ) -> SharedLinkId {
        let id = SharedLinkId::new();
        let link_type = if album_id.is_some() { "album" } else { "individual" };
        sqlx::query(
            "INSERT INTO shared_links (id, user_id, key, type, album_id) \
             VALUES ($1, $2, $3, $4::shared_link_type, $5)",
        )
        .bind(id)
        .bind(user_id)
        .bind(id.0.as_bytes().to_vec())
        .bind(link_type)
        .bind(album_id)
        .execute(self.pool())
        .await
        .expect("Failed to create shared link");
        id
    }

    /// Number of membership rows for an album
    pub async fn album_asset_count(&self, album_id: AlbumId) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM albums_assets WHERE album_id = $1")
            .bind(album_id)
            .fetch_one(self.pool())
            .await
            .expect("Failed to count album assets")
    }

    /// Current cover of an album
    pub async fn album_thumbnail(&self, album_id: AlbumId) -> Option<AssetId> {
        sqlx::query_scalar("SELECT album_thumbnail_asset_id FROM albums WHERE id = $1")
            .bind(album_id)
            .fetch_one(self.pool())
            .await
            .expect("Failed to read album thumbnail")
    }
}
