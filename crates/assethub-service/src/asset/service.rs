//! Asset trash and statistics service.

use std::sync::Arc;

use tracing::info;

use assethub_auth::{AccessCore, AuthContext};
use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_core::types::id::AssetId;
use assethub_database::repositories::AssetRepository;
use assethub_entity::asset::{AssetStats, AssetStatsOptions};
use assethub_entity::permission::Permission;

/// Moves assets to and from the trash and reports per-type counts.
#[derive(Clone)]
pub struct AssetService {
    access: Arc<AccessCore>,
    assets: Arc<dyn AssetRepository>,
}

impl std::fmt::Debug for AssetService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetService").finish_non_exhaustive()
    }
}

impl AssetService {
    /// Creates a new asset service.
    pub fn new(access: Arc<AccessCore>, assets: Arc<dyn AssetRepository>) -> Self {
        Self { access, assets }
    }

    /// Counts the caller's visible assets by type.
    pub async fn statistics(
        &self,
        auth: &AuthContext,
        options: AssetStatsOptions,
    ) -> AppResult<AssetStats> {
        if auth.is_shared_link() {
            return Err(AppError::authorization(
                "Statistics are not available through a shared link",
            ));
        }
        self.assets.get_statistics(auth.user_id, options).await
    }

    /// Soft-deletes assets. Returns how many were newly trashed.
    pub async fn trash(&self, auth: &AuthContext, asset_ids: &[AssetId]) -> AppResult<u64> {
        self.access
            .require_access(auth, Permission::AssetDelete, asset_ids.iter().copied())
            .await?;
        let trashed = self.assets.soft_delete_all(asset_ids).await?;
        info!(user_id = %auth.user_id, trashed, "Assets moved to trash");
        Ok(trashed)
    }

    /// Restores trashed assets. Returns how many were restored.
    pub async fn restore(&self, auth: &AuthContext, asset_ids: &[AssetId]) -> AppResult<u64> {
        self.access
            .require_access(auth, Permission::AssetDelete, asset_ids.iter().copied())
            .await?;
        let restored = self.assets.restore_all(asset_ids).await?;
        info!(user_id = %auth.user_id, restored, "Assets restored from trash");
        Ok(restored)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use assethub_core::error::ErrorKind;
    use assethub_core::types::id::{SharedLinkId, UserId};
    use assethub_database::MemoryStore;
    use assethub_entity::asset::{Asset, AssetType};
    use assethub_entity::shared_link::{SharedLink, SharedLinkType};

    async fn asset(store: &MemoryStore, owner_id: UserId, asset_type: AssetType) -> AssetId {
        let asset = Asset {
            id: AssetId::new(),
            owner_id,
            library_id: None,
            asset_type,
            original_path: "/upload/file".to_string(),
            file_created_at: Utc::now(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
            is_visible: true,
            is_archived: false,
            is_favorite: false,
        };
        let id = asset.id;
        store.insert_asset(asset).await;
        id
    }

    fn service(store: &MemoryStore) -> AssetService {
        AssetService::new(
            Arc::new(AccessCore::new(Arc::new(store.clone()))),
            Arc::new(store.clone()),
        )
    }

    #[tokio::test]
    async fn test_trash_and_restore_update_statistics() {
        let store = MemoryStore::new();
        let owner = UserId::new();
        let photo = asset(&store, owner, AssetType::Image).await;
        asset(&store, owner, AssetType::Audio).await;
        let service = service(&store);
        let auth = AuthContext::user(owner);

        assert_eq!(service.trash(&auth, &[photo]).await.unwrap(), 1);
        let live = service
            .statistics(&auth, AssetStatsOptions::default())
            .await
            .unwrap();
        assert_eq!((live.images, live.audio), (0, 1));

        assert_eq!(service.restore(&auth, &[photo]).await.unwrap(), 1);
        let live = service
            .statistics(&auth, AssetStatsOptions::default())
            .await
            .unwrap();
        assert_eq!(live.total(), 2);
    }

    #[tokio::test]
    async fn test_trash_requires_ownership_of_every_asset() {
        let store = MemoryStore::new();
        let owner = UserId::new();
        let mine = asset(&store, owner, AssetType::Image).await;
        let theirs = asset(&store, UserId::new(), AssetType::Image).await;

        let err = service(&store)
            .trash(&AuthContext::user(owner), &[mine, theirs])
            .await
            .unwrap_err();

        assert!(err.is(ErrorKind::Authorization));
        let stats = store
            .get_statistics(owner, AssetStatsOptions::default())
            .await
            .unwrap();
        assert_eq!(stats.images, 1);
    }

    #[tokio::test]
    async fn test_statistics_rejects_shared_link() {
        let store = MemoryStore::new();
        let link = SharedLink {
            id: SharedLinkId::new(),
            user_id: UserId::new(),
            key: vec![1; 16],
            link_type: SharedLinkType::Individual,
            album_id: None,
            allow_upload: false,
            allow_download: false,
            expires_at: None,
            created_at: Utc::now(),
        };

        let err = service(&store)
            .statistics(&AuthContext::shared_link(link), AssetStatsOptions::default())
            .await
            .unwrap_err();

        assert!(err.is(ErrorKind::Authorization));
    }
}
