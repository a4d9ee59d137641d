//! Shared link asset list service.

use std::sync::Arc;

use assethub_auth::{AccessCore, AuthContext};
use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_core::traits::BulkAssetRepository;
use assethub_core::types::id::SharedLinkId;
use assethub_database::repositories::SharedLinkRepository;
use assethub_entity::bulk::{BulkIdResponse, BulkIdsDto};
use assethub_entity::permission::Permission;
use assethub_entity::shared_link::SharedLink;

use crate::bulk::{self, BulkRepositories};

/// Edits the hand-picked asset list of individual shared links.
#[derive(Clone)]
pub struct SharedLinkService {
    access: Arc<AccessCore>,
    shared_links: Arc<dyn SharedLinkRepository>,
    link_assets: Arc<dyn BulkAssetRepository<ParentId = SharedLinkId>>,
}

impl std::fmt::Debug for SharedLinkService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedLinkService").finish_non_exhaustive()
    }
}

impl SharedLinkService {
    /// Creates a new shared link service.
    pub fn new(
        access: Arc<AccessCore>,
        shared_links: Arc<dyn SharedLinkRepository>,
        link_assets: Arc<dyn BulkAssetRepository<ParentId = SharedLinkId>>,
    ) -> Self {
        Self {
            access,
            shared_links,
            link_assets,
        }
    }

    /// Adds assets to the link `dto.id`.
    pub async fn add_assets(
        &self,
        auth: &AuthContext,
        dto: BulkIdsDto<SharedLinkId>,
    ) -> AppResult<Vec<BulkIdResponse>> {
        self.find_individual(auth, dto.id).await?;
        bulk::add_assets(auth, self.repositories(), &dto).await
    }

    /// Removes assets from the link `dto.id`.
    pub async fn remove_assets(
        &self,
        auth: &AuthContext,
        dto: BulkIdsDto<SharedLinkId>,
    ) -> AppResult<Vec<BulkIdResponse>> {
        self.find_individual(auth, dto.id).await?;
        bulk::remove_assets(auth, self.repositories(), &dto).await
    }

    /// Loads a link the caller may update, rejecting album links.
    async fn find_individual(
        &self,
        auth: &AuthContext,
        shared_link_id: SharedLinkId,
    ) -> AppResult<SharedLink> {
        self.access
            .require_access(auth, Permission::SharedLinkUpdate, [shared_link_id])
            .await?;

        let link = self
            .shared_links
            .find_by_id(shared_link_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Shared link {shared_link_id} not found")))?;

        if !link.is_individual() {
            return Err(AppError::validation("Invalid shared link type"));
        }
        Ok(link)
    }

    fn repositories(
        &self,
    ) -> BulkRepositories<'_, dyn BulkAssetRepository<ParentId = SharedLinkId>> {
        BulkRepositories::new(&self.access, self.link_assets.as_ref())
    }
}
