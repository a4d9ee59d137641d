//! Shared in-memory state and the repository traits implemented over it.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use assethub_core::result::AppResult;
use assethub_core::traits::AccessRepository;
use assethub_core::types::id::{AlbumId, AssetId, SharedLinkId, UserId};
use assethub_core::types::pagination::{PageRequest, Paginated};
use assethub_core::types::role::AlbumUserRole;
use assethub_entity::album::{Album, AlbumUser};
use assethub_entity::asset::{Asset, AssetStats, AssetStatsOptions};
use assethub_entity::shared_link::SharedLink;

use super::membership::{MemoryAlbumAssets, MemorySharedLinkAssets};
use crate::repositories::{AlbumRepository, AssetRepository, SharedLinkRepository};

/// Tables of the in-memory store.
#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) assets: HashMap<AssetId, Asset>,
    pub(crate) albums: HashMap<AlbumId, Album>,
    pub(crate) album_users: HashMap<(AlbumId, UserId), AlbumUserRole>,
    pub(crate) album_assets: HashMap<AlbumId, HashSet<AssetId>>,
    pub(crate) shared_links: HashMap<SharedLinkId, SharedLink>,
    pub(crate) shared_link_assets: HashMap<SharedLinkId, HashSet<AssetId>>,
    /// `(shared_by, shared_with)` partner pairs.
    pub(crate) partners: HashSet<(UserId, UserId)>,
}

/// In-memory implementation of every AssetHub repository.
///
/// Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub(crate) state: Arc<RwLock<State>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Album membership view.
    pub fn album_assets(&self) -> MemoryAlbumAssets {
        MemoryAlbumAssets::new(self.clone())
    }

    /// Individual shared link membership view.
    pub fn shared_link_assets(&self) -> MemorySharedLinkAssets {
        MemorySharedLinkAssets::new(self.clone())
    }

    /// Inserts or replaces an asset.
    pub async fn insert_asset(&self, asset: Asset) {
        self.state.write().await.assets.insert(asset.id, asset);
    }

    /// Inserts or replaces an album.
    pub async fn insert_album(&self, album: Album) {
        self.state.write().await.albums.insert(album.id, album);
    }

    /// Shares an album with a user.
    pub async fn insert_album_user(&self, album_user: AlbumUser) {
        self.state
            .write()
            .await
            .album_users
            .insert((album_user.album_id, album_user.user_id), album_user.role);
    }

    /// Inserts or replaces a shared link.
    pub async fn insert_shared_link(&self, shared_link: SharedLink) {
        self.state
            .write()
            .await
            .shared_links
            .insert(shared_link.id, shared_link);
    }

    /// Lets `shared_with` see the library of `shared_by`.
    pub async fn insert_partner(&self, shared_by: UserId, shared_with: UserId) {
        self.state
            .write()
            .await
            .partners
            .insert((shared_by, shared_with));
    }

    /// Current members of an album.
    pub async fn album_members(&self, album_id: AlbumId) -> HashSet<AssetId> {
        self.state
            .read()
            .await
            .album_assets
            .get(&album_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Current members of an individual shared link.
    pub async fn shared_link_members(&self, shared_link_id: SharedLinkId) -> HashSet<AssetId> {
        self.state
            .read()
            .await
            .shared_link_assets
            .get(&shared_link_id)
            .cloned()
            .unwrap_or_default()
    }
}

impl State {
    fn can_read_album(&self, user_id: UserId, album_id: AlbumId) -> bool {
        self.albums
            .get(&album_id)
            .is_some_and(|album| album.owner_id == user_id)
            || self.album_users.contains_key(&(album_id, user_id))
    }

    fn album_contains(&self, album_id: Option<AlbumId>, asset_id: &AssetId) -> bool {
        album_id
            .and_then(|id| self.album_assets.get(&id))
            .is_some_and(|members| members.contains(asset_id))
    }
}

fn retain<I, F>(ids: &HashSet<I>, keep: F) -> HashSet<I>
where
    I: Copy + Eq + Hash,
    F: Fn(&I) -> bool,
{
    ids.iter().filter(|id| keep(id)).copied().collect()
}

#[async_trait]
impl AccessRepository for MemoryStore {
    async fn asset_owner_access(
        &self,
        user_id: UserId,
        asset_ids: &HashSet<AssetId>,
    ) -> AppResult<HashSet<AssetId>> {
        let state = self.state.read().await;
        Ok(retain(asset_ids, |id| {
            state
                .assets
                .get(id)
                .is_some_and(|asset| asset.owner_id == user_id)
        }))
    }

    async fn asset_partner_access(
        &self,
        user_id: UserId,
        asset_ids: &HashSet<AssetId>,
    ) -> AppResult<HashSet<AssetId>> {
        let state = self.state.read().await;
        Ok(retain(asset_ids, |id| {
            state.assets.get(id).is_some_and(|asset| {
                !asset.is_archived && state.partners.contains(&(asset.owner_id, user_id))
            })
        }))
    }

    async fn asset_album_access(
        &self,
        user_id: UserId,
        asset_ids: &HashSet<AssetId>,
    ) -> AppResult<HashSet<AssetId>> {
        let state = self.state.read().await;
        let readable: Vec<&HashSet<AssetId>> = state
            .album_assets
            .iter()
            .filter(|(album_id, _)| state.can_read_album(user_id, **album_id))
            .map(|(_, members)| members)
            .collect();

        Ok(retain(asset_ids, |id| {
            readable.iter().any(|members| members.contains(id))
        }))
    }

    async fn asset_shared_link_access(
        &self,
        shared_link_id: SharedLinkId,
        asset_ids: &HashSet<AssetId>,
    ) -> AppResult<HashSet<AssetId>> {
        let state = self.state.read().await;
        let Some(link) = state.shared_links.get(&shared_link_id) else {
            return Ok(HashSet::new());
        };
        let own = state.shared_link_assets.get(&shared_link_id);

        Ok(retain(asset_ids, |id| {
            state.album_contains(link.album_id, id) || own.is_some_and(|members| members.contains(id))
        }))
    }

    async fn album_owner_access(
        &self,
        user_id: UserId,
        album_ids: &HashSet<AlbumId>,
    ) -> AppResult<HashSet<AlbumId>> {
        let state = self.state.read().await;
        Ok(retain(album_ids, |id| {
            state
                .albums
                .get(id)
                .is_some_and(|album| album.owner_id == user_id)
        }))
    }

    async fn album_shared_access(
        &self,
        user_id: UserId,
        album_ids: &HashSet<AlbumId>,
        minimum: AlbumUserRole,
    ) -> AppResult<HashSet<AlbumId>> {
        let state = self.state.read().await;
        Ok(retain(album_ids, |id| {
            state
                .album_users
                .get(&(*id, user_id))
                .is_some_and(|role| role.has_at_least(&minimum))
        }))
    }

    async fn album_shared_link_access(
        &self,
        shared_link_id: SharedLinkId,
        album_ids: &HashSet<AlbumId>,
    ) -> AppResult<HashSet<AlbumId>> {
        let state = self.state.read().await;
        let linked = state
            .shared_links
            .get(&shared_link_id)
            .and_then(|link| link.album_id);
        Ok(retain(album_ids, |id| linked == Some(*id)))
    }

    async fn shared_link_owner_access(
        &self,
        user_id: UserId,
        shared_link_ids: &HashSet<SharedLinkId>,
    ) -> AppResult<HashSet<SharedLinkId>> {
        let state = self.state.read().await;
        Ok(retain(shared_link_ids, |id| {
            state
                .shared_links
                .get(id)
                .is_some_and(|link| link.user_id == user_id)
        }))
    }
}

#[async_trait]
impl AlbumRepository for MemoryStore {
    async fn find_by_id(&self, album_id: AlbumId) -> AppResult<Option<Album>> {
        Ok(self.state.read().await.albums.get(&album_id).cloned())
    }

    async fn touch(&self, album_id: AlbumId) -> AppResult<()> {
        if let Some(album) = self.state.write().await.albums.get_mut(&album_id) {
            album.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn set_thumbnail(&self, album_id: AlbumId, asset_id: Option<AssetId>) -> AppResult<()> {
        if let Some(album) = self.state.write().await.albums.get_mut(&album_id) {
            album.album_thumbnail_asset_id = asset_id;
        }
        Ok(())
    }

    async fn latest_asset_id(&self, album_id: AlbumId) -> AppResult<Option<AssetId>> {
        let state = self.state.read().await;
        let Some(members) = state.album_assets.get(&album_id) else {
            return Ok(None);
        };

        Ok(members
            .iter()
            .filter_map(|id| state.assets.get(id))
            .filter(|asset| !asset.is_trashed())
            .max_by_key(|asset| (asset.file_created_at, asset.id))
            .map(|asset| asset.id))
    }
}

#[async_trait]
impl SharedLinkRepository for MemoryStore {
    async fn find_by_id(&self, shared_link_id: SharedLinkId) -> AppResult<Option<SharedLink>> {
        Ok(self
            .state
            .read()
            .await
            .shared_links
            .get(&shared_link_id)
            .cloned())
    }
}

#[async_trait]
impl AssetRepository for MemoryStore {
    async fn find_by_ids(&self, asset_ids: &[AssetId]) -> AppResult<Vec<Asset>> {
        let state = self.state.read().await;
        let unique: HashSet<&AssetId> = asset_ids.iter().collect();
        Ok(unique
            .into_iter()
            .filter_map(|id| state.assets.get(id).cloned())
            .collect())
    }

    async fn find_by_album_id(
        &self,
        page: PageRequest,
        album_id: AlbumId,
    ) -> AppResult<Paginated<Asset>> {
        let state = self.state.read().await;
        let mut assets: Vec<Asset> = state
            .album_assets
            .get(&album_id)
            .into_iter()
            .flatten()
            .filter_map(|id| state.assets.get(id))
            .filter(|asset| !asset.is_trashed())
            .cloned()
            .collect();
        assets.sort_by(|a, b| (b.file_created_at, b.id).cmp(&(a.file_created_at, a.id)));

        let rows = assets
            .into_iter()
            .skip(usize::try_from(page.skip).unwrap_or(usize::MAX))
            .take(page.limit_with_lookahead() as usize)
            .collect();
        Ok(Paginated::from_lookahead(rows, page.take))
    }

    async fn soft_delete_all(&self, asset_ids: &[AssetId]) -> AppResult<u64> {
        let mut state = self.state.write().await;
        let now = Utc::now();
        let mut changed = 0;
        for id in asset_ids.iter().collect::<HashSet<_>>() {
            if let Some(asset) = state.assets.get_mut(id) {
                if asset.deleted_at.is_none() {
                    asset.deleted_at = Some(now);
                    asset.updated_at = now;
                    changed += 1;
                }
            }
        }
        Ok(changed)
    }

    async fn restore_all(&self, asset_ids: &[AssetId]) -> AppResult<u64> {
        let mut state = self.state.write().await;
        let now = Utc::now();
        let mut changed = 0;
        for id in asset_ids.iter().collect::<HashSet<_>>() {
            if let Some(asset) = state.assets.get_mut(id) {
                if asset.deleted_at.take().is_some() {
                    asset.updated_at = now;
                    changed += 1;
                }
            }
        }
        Ok(changed)
    }

    async fn get_statistics(
        &self,
        owner_id: UserId,
        options: AssetStatsOptions,
    ) -> AppResult<AssetStats> {
        let state = self.state.read().await;
        let mut stats = AssetStats::default();
        state
            .assets
            .values()
            .filter(|asset| asset.owner_id == owner_id && asset.is_visible)
            .filter(|asset| options.is_archived.is_none_or(|v| asset.is_archived == v))
            .filter(|asset| options.is_favorite.is_none_or(|v| asset.is_favorite == v))
            .filter(|asset| asset.is_trashed() == options.is_trashed)
            .for_each(|asset| stats.record(asset.asset_type, 1));
        Ok(stats)
    }
}
