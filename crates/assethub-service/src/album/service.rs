//! Album membership service.

use std::sync::Arc;

use tracing::info;

use assethub_auth::{AccessCore, AuthContext};
use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_core::traits::BulkAssetRepository;
use assethub_core::types::id::AlbumId;
use assethub_core::types::pagination::{PageRequest, Paginated};
use assethub_database::repositories::{AlbumRepository, AssetRepository};
use assethub_entity::album::Album;
use assethub_entity::asset::Asset;
use assethub_entity::bulk::{BulkIdResponse, BulkIdsDto};
use assethub_entity::permission::Permission;

use crate::bulk::{self, BulkRepositories};

/// Adds, removes, and lists the assets of an album.
#[derive(Clone)]
pub struct AlbumService {
    /// Access gate.
    access: Arc<AccessCore>,
    /// Album rows.
    albums: Arc<dyn AlbumRepository>,
    /// Asset rows.
    assets: Arc<dyn AssetRepository>,
    /// Album membership.
    album_assets: Arc<dyn BulkAssetRepository<ParentId = AlbumId>>,
}

impl std::fmt::Debug for AlbumService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlbumService").finish_non_exhaustive()
    }
}

impl AlbumService {
    /// Creates a new album service.
    pub fn new(
        access: Arc<AccessCore>,
        albums: Arc<dyn AlbumRepository>,
        assets: Arc<dyn AssetRepository>,
        album_assets: Arc<dyn BulkAssetRepository<ParentId = AlbumId>>,
    ) -> Self {
        Self {
            access,
            albums,
            assets,
            album_assets,
        }
    }

    /// Adds assets to the album `dto.id`.
    ///
    /// When anything was added the album is touched, and an album without a
    /// cover takes the first added asset as its cover.
    pub async fn add_assets(
        &self,
        auth: &AuthContext,
        dto: BulkIdsDto<AlbumId>,
    ) -> AppResult<Vec<BulkIdResponse>> {
        self.access
            .require_access(auth, Permission::AlbumAddAsset, [dto.id])
            .await?;
        let album = self.find_album(dto.id).await?;

        let results = bulk::add_assets(auth, self.repositories(), &dto).await?;
        let added = bulk::succeeded(&results);

        if let Some(&first) = added.first() {
            self.albums.touch(album.id).await?;
            if album.album_thumbnail_asset_id.is_none() {
                self.albums.set_thumbnail(album.id, Some(first)).await?;
            }
            info!(album_id = %album.id, added = added.len(), "Assets added to album");
        }

        Ok(results)
    }

    /// Removes assets from the album `dto.id`.
    ///
    /// When the cover is among the removed assets it moves to the album's
    /// most recent remaining asset, or is cleared if none is left.
    pub async fn remove_assets(
        &self,
        auth: &AuthContext,
        dto: BulkIdsDto<AlbumId>,
    ) -> AppResult<Vec<BulkIdResponse>> {
        self.access
            .require_access(auth, Permission::AlbumRemoveAsset, [dto.id])
            .await?;
        let album = self.find_album(dto.id).await?;

        let results = bulk::remove_assets(auth, self.repositories(), &dto).await?;
        let removed = bulk::succeeded(&results);

        if !removed.is_empty() {
            self.albums.touch(album.id).await?;
            if album
                .album_thumbnail_asset_id
                .is_some_and(|cover| removed.contains(&cover))
            {
                let cover = self.albums.latest_asset_id(album.id).await?;
                self.albums.set_thumbnail(album.id, cover).await?;
            }
            info!(album_id = %album.id, removed = removed.len(), "Assets removed from album");
        }

        Ok(results)
    }

    /// Lists the album's assets, newest first.
    pub async fn get_assets(
        &self,
        auth: &AuthContext,
        album_id: AlbumId,
        page: PageRequest,
    ) -> AppResult<Paginated<Asset>> {
        self.access
            .require_access(auth, Permission::AlbumRead, [album_id])
            .await?;
        self.assets.find_by_album_id(page, album_id).await
    }

    async fn find_album(&self, album_id: AlbumId) -> AppResult<Album> {
        self.albums
            .find_by_id(album_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Album {album_id} not found")))
    }

    fn repositories(&self) -> BulkRepositories<'_, dyn BulkAssetRepository<ParentId = AlbumId>> {
        BulkRepositories::new(&self.access, self.album_assets.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{Duration, Utc};

    use super::*;
    use assethub_core::error::ErrorKind;
    use assethub_core::types::id::{AssetId, SharedLinkId, UserId};
    use assethub_core::types::role::AlbumUserRole;
    use assethub_database::MemoryStore;
    use assethub_entity::album::AlbumUser;
    use assethub_entity::asset::AssetType;
    use assethub_entity::bulk::BulkIdErrorReason;
    use assethub_entity::shared_link::{SharedLink, SharedLinkType};

    struct Fixture {
        store: MemoryStore,
        service: AlbumService,
        owner: UserId,
        album_id: AlbumId,
    }

    impl Fixture {
        async fn new() -> Self {
            let store = MemoryStore::new();
            let owner = UserId::new();
            let album_id = AlbumId::new();
            store
                .insert_album(Album {
                    id: album_id,
                    owner_id: owner,
                    album_name: "Summer".to_string(),
                    description: String::new(),
                    album_thumbnail_asset_id: None,
                    created_at: Utc::now() - Duration::days(1),
                    updated_at: Utc::now() - Duration::days(1),
                })
                .await;
            let service = AlbumService::new(
                Arc::new(AccessCore::new(Arc::new(store.clone()))),
                Arc::new(store.clone()),
                Arc::new(store.clone()),
                Arc::new(store.album_assets()),
            );
            Self {
                store,
                service,
                owner,
                album_id,
            }
        }

        async fn asset(&self, owner_id: UserId, age_days: i64) -> AssetId {
            let taken = Utc::now() - Duration::days(age_days);
            let asset = Asset {
                id: AssetId::new(),
                owner_id,
                library_id: None,
                asset_type: AssetType::Image,
                original_path: "/upload/beach.jpg".to_string(),
                file_created_at: taken,
                created_at: taken,
                updated_at: taken,
                deleted_at: None,
                is_visible: true,
                is_archived: false,
                is_favorite: false,
            };
            let id = asset.id;
            self.store.insert_asset(asset).await;
            id
        }

        async fn album(&self) -> Album {
            AlbumRepository::find_by_id(&self.store, self.album_id)
                .await
                .unwrap()
                .unwrap()
        }
    }

    #[tokio::test]
    async fn test_first_add_sets_cover_and_touches() {
        let fx = Fixture::new().await;
        let before = fx.album().await.updated_at;
        let a = fx.asset(fx.owner, 3).await;
        let b = fx.asset(fx.owner, 1).await;

        let results = fx
            .service
            .add_assets(&AuthContext::user(fx.owner), BulkIdsDto::new(fx.album_id, [a, b]))
            .await
            .unwrap();

        assert!(results.iter().all(|r| r.success));
        let album = fx.album().await;
        assert_eq!(album.album_thumbnail_asset_id, Some(a));
        assert!(album.updated_at > before);
    }

    #[tokio::test]
    async fn test_add_keeps_existing_cover() {
        let fx = Fixture::new().await;
        let a = fx.asset(fx.owner, 3).await;
        let b = fx.asset(fx.owner, 1).await;
        let auth = AuthContext::user(fx.owner);

        fx.service
            .add_assets(&auth, BulkIdsDto::new(fx.album_id, [a]))
            .await
            .unwrap();
        fx.service
            .add_assets(&auth, BulkIdsDto::new(fx.album_id, [b]))
            .await
            .unwrap();

        assert_eq!(fx.album().await.album_thumbnail_asset_id, Some(a));
    }

    #[tokio::test]
    async fn test_all_duplicates_leave_album_untouched() {
        let fx = Fixture::new().await;
        let a = fx.asset(fx.owner, 1).await;
        fx.store
            .album_assets()
            .add_asset_ids(fx.album_id, &[a])
            .await
            .unwrap();
        let before = fx.album().await;

        let results = fx
            .service
            .add_assets(&AuthContext::user(fx.owner), BulkIdsDto::new(fx.album_id, [a]))
            .await
            .unwrap();

        assert_eq!(results[0].error, Some(BulkIdErrorReason::Duplicate));
        let after = fx.album().await;
        assert_eq!(after.updated_at, before.updated_at);
        assert_eq!(after.album_thumbnail_asset_id, None);
    }

    #[tokio::test]
    async fn test_removing_cover_picks_latest_remaining() {
        let fx = Fixture::new().await;
        let old = fx.asset(fx.owner, 5).await;
        let newer = fx.asset(fx.owner, 2).await;
        let cover = fx.asset(fx.owner, 9).await;
        let auth = AuthContext::user(fx.owner);
        fx.service
            .add_assets(&auth, BulkIdsDto::new(fx.album_id, [cover, old, newer]))
            .await
            .unwrap();
        assert_eq!(fx.album().await.album_thumbnail_asset_id, Some(cover));

        fx.service
            .remove_assets(&auth, BulkIdsDto::new(fx.album_id, [cover]))
            .await
            .unwrap();
        assert_eq!(fx.album().await.album_thumbnail_asset_id, Some(newer));

        fx.service
            .remove_assets(&auth, BulkIdsDto::new(fx.album_id, [old, newer]))
            .await
            .unwrap();
        assert_eq!(fx.album().await.album_thumbnail_asset_id, None);
    }

    #[tokio::test]
    async fn test_viewer_cannot_add() {
        let fx = Fixture::new().await;
        let viewer = UserId::new();
        fx.store
            .insert_album_user(AlbumUser {
                album_id: fx.album_id,
                user_id: viewer,
                role: AlbumUserRole::Viewer,
            })
            .await;
        let own = fx.asset(viewer, 1).await;

        let err = fx
            .service
            .add_assets(&AuthContext::user(viewer), BulkIdsDto::new(fx.album_id, [own]))
            .await
            .unwrap_err();

        assert!(err.is(ErrorKind::Authorization));
        assert!(fx.store.album_members(fx.album_id).await.is_empty());
    }

    #[tokio::test]
    async fn test_editor_adds_only_assets_they_can_share() {
        let fx = Fixture::new().await;
        let editor = UserId::new();
        fx.store
            .insert_album_user(AlbumUser {
                album_id: fx.album_id,
                user_id: editor,
                role: AlbumUserRole::Editor,
            })
            .await;
        let theirs = fx.asset(editor, 1).await;
        let owners = fx.asset(fx.owner, 1).await;

        let results = fx
            .service
            .add_assets(
                &AuthContext::user(editor),
                BulkIdsDto::new(fx.album_id, [theirs, owners]),
            )
            .await
            .unwrap();

        assert!(results[0].success);
        assert_eq!(results[1].error, Some(BulkIdErrorReason::NoPermission));
    }

    #[tokio::test]
    async fn test_unknown_album_is_rejected() {
        let fx = Fixture::new().await;
        let a = fx.asset(fx.owner, 1).await;

        let err = fx
            .service
            .add_assets(&AuthContext::user(fx.owner), BulkIdsDto::new(AlbumId::new(), [a]))
            .await
            .unwrap_err();

        assert!(err.is(ErrorKind::Authorization));
    }

    #[tokio::test]
    async fn test_shared_link_reads_album_page() {
        let fx = Fixture::new().await;
        let ids = [
            fx.asset(fx.owner, 3).await,
            fx.asset(fx.owner, 2).await,
            fx.asset(fx.owner, 1).await,
        ];
        fx.store
            .album_assets()
            .add_asset_ids(fx.album_id, &ids)
            .await
            .unwrap();
        let link = SharedLink {
            id: SharedLinkId::new(),
            user_id: fx.owner,
            key: vec![9; 16],
            link_type: SharedLinkType::Album,
            album_id: Some(fx.album_id),
            allow_upload: false,
            allow_download: true,
            expires_at: None,
            created_at: Utc::now(),
        };
        fx.store.insert_shared_link(link.clone()).await;

        let page = fx
            .service
            .get_assets(&AuthContext::shared_link(link), fx.album_id, PageRequest::new(0, 2))
            .await
            .unwrap();

        assert_eq!(
            page.items.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![ids[2], ids[1]]
        );
        assert!(page.has_next_page);
    }

    #[tokio::test]
    async fn test_upload_link_adds_link_owner_assets() {
        let fx = Fixture::new().await;
        let owners = fx.asset(fx.owner, 1).await;
        let strangers = fx.asset(UserId::new(), 1).await;
        let link = SharedLink {
            id: SharedLinkId::new(),
            user_id: fx.owner,
            key: vec![3; 16],
            link_type: SharedLinkType::Album,
            album_id: Some(fx.album_id),
            allow_upload: true,
            allow_download: true,
            expires_at: None,
            created_at: Utc::now(),
        };
        fx.store.insert_shared_link(link.clone()).await;

        let results = fx
            .service
            .add_assets(
                &AuthContext::shared_link(link),
                BulkIdsDto::new(fx.album_id, [owners, strangers]),
            )
            .await
            .unwrap();

        assert!(results[0].success);
        assert_eq!(results[1].error, Some(BulkIdErrorReason::NoPermission));
        assert_eq!(fx.store.album_members(fx.album_id).await, HashSet::from([owners]));
        assert_eq!(fx.album().await.album_thumbnail_asset_id, Some(owners));
    }
}
