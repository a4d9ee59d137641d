//! Shared link repository.

use async_trait::async_trait;
use sqlx::PgPool;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::types::id::SharedLinkId;
use assethub_entity::shared_link::SharedLink;

/// Shared link lookups.
#[async_trait]
pub trait SharedLinkRepository: Send + Sync + 'static {
    /// Find a shared link by ID.
    async fn find_by_id(&self, shared_link_id: SharedLinkId) -> AppResult<Option<SharedLink>>;
}

/// PostgreSQL shared link repository.
#[derive(Debug, Clone)]
pub struct PgSharedLinkRepository {
    pool: PgPool,
}

impl PgSharedLinkRepository {
    /// Create a new shared link repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SharedLinkRepository for PgSharedLinkRepository {
    async fn find_by_id(&self, shared_link_id: SharedLinkId) -> AppResult<Option<SharedLink>> {
        sqlx::query_as::<_, SharedLink>("SELECT * FROM shared_links WHERE id = $1")
            .bind(shared_link_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find shared link", e)
            })
    }
}
