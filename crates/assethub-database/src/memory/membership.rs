//! Membership views over a [`MemoryStore`].

use std::collections::HashSet;

use async_trait::async_trait;

use assethub_core::result::AppResult;
use assethub_core::traits::BulkAssetRepository;
use assethub_core::types::id::{AlbumId, AssetId, SharedLinkId};

use super::store::MemoryStore;

/// Album membership backed by a [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryAlbumAssets {
    store: MemoryStore,
}

impl MemoryAlbumAssets {
    pub(crate) fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BulkAssetRepository for MemoryAlbumAssets {
    type ParentId = AlbumId;

    async fn get_asset_ids(
        &self,
        album_id: AlbumId,
        asset_ids: &[AssetId],
    ) -> AppResult<HashSet<AssetId>> {
        let state = self.store.state.read().await;
        Ok(intersect(state.album_assets.get(&album_id), asset_ids))
    }

    async fn add_asset_ids(&self, album_id: AlbumId, asset_ids: &[AssetId]) -> AppResult<()> {
        let mut state = self.store.state.write().await;
        state
            .album_assets
            .entry(album_id)
            .or_default()
            .extend(asset_ids.iter().copied());
        Ok(())
    }

    async fn remove_asset_ids(&self, album_id: AlbumId, asset_ids: &[AssetId]) -> AppResult<()> {
        let mut state = self.store.state.write().await;
        if let Some(members) = state.album_assets.get_mut(&album_id) {
            for id in asset_ids {
                members.remove(id);
            }
        }
        Ok(())
    }
}

/// Individual shared link membership backed by a [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct MemorySharedLinkAssets {
    store: MemoryStore,
}

impl MemorySharedLinkAssets {
    pub(crate) fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BulkAssetRepository for MemorySharedLinkAssets {
    type ParentId = SharedLinkId;

    async fn get_asset_ids(
        &self,
        shared_link_id: SharedLinkId,
        asset_ids: &[AssetId],
    ) -> AppResult<HashSet<AssetId>> {
        let state = self.store.state.read().await;
        Ok(intersect(
            state.shared_link_assets.get(&shared_link_id),
            asset_ids,
        ))
    }

    async fn add_asset_ids(
        &self,
        shared_link_id: SharedLinkId,
        asset_ids: &[AssetId],
    ) -> AppResult<()> {
        let mut state = self.store.state.write().await;
        state
            .shared_link_assets
            .entry(shared_link_id)
            .or_default()
            .extend(asset_ids.iter().copied());
        Ok(())
    }

    async fn remove_asset_ids(
        &self,
        shared_link_id: SharedLinkId,
        asset_ids: &[AssetId],
    ) -> AppResult<()> {
        let mut state = self.store.state.write().await;
        if let Some(members) = state.shared_link_assets.get_mut(&shared_link_id) {
            for id in asset_ids {
                members.remove(id);
            }
        }
        Ok(())
    }
}

fn intersect(members: Option<&HashSet<AssetId>>, candidates: &[AssetId]) -> HashSet<AssetId> {
    match members {
        Some(members) => candidates
            .iter()
            .filter(|id| members.contains(id))
            .copied()
            .collect(),
        None => HashSet::new(),
    }
}
