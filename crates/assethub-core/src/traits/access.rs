//! Batched authorization queries used by the access gate.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::id::{AlbumId, AssetId, SharedLinkId, UserId};
use crate::types::role::AlbumUserRole;

/// Batched access checks.
///
/// Every method is a pure filter: it returns the subset of the given ids the
/// subject may act on and never mutates state. Implementations may assume
/// the id set is non-empty; callers short-circuit the empty case.
#[async_trait]
pub trait AccessRepository: Send + Sync + 'static {
    /// Assets owned by `user_id`.
    async fn asset_owner_access(
        &self,
        user_id: UserId,
        asset_ids: &HashSet<AssetId>,
    ) -> AppResult<HashSet<AssetId>>;

    /// Assets owned by users who share their library with `user_id`.
    async fn asset_partner_access(
        &self,
        user_id: UserId,
        asset_ids: &HashSet<AssetId>,
    ) -> AppResult<HashSet<AssetId>>;

    /// Assets contained in an album that `user_id` owns or was added to.
    async fn asset_album_access(
        &self,
        user_id: UserId,
        asset_ids: &HashSet<AssetId>,
    ) -> AppResult<HashSet<AssetId>>;

    /// Assets reachable through a shared link (its album or its own asset list).
    async fn asset_shared_link_access(
        &self,
        shared_link_id: SharedLinkId,
        asset_ids: &HashSet<AssetId>,
    ) -> AppResult<HashSet<AssetId>>;

    /// Albums owned by `user_id`.
    async fn album_owner_access(
        &self,
        user_id: UserId,
        album_ids: &HashSet<AlbumId>,
    ) -> AppResult<HashSet<AlbumId>>;

    /// Albums shared with `user_id` with at least the `minimum` role.
    async fn album_shared_access(
        &self,
        user_id: UserId,
        album_ids: &HashSet<AlbumId>,
        minimum: AlbumUserRole,
    ) -> AppResult<HashSet<AlbumId>>;

    /// Albums exposed by the given shared link.
    async fn album_shared_link_access(
        &self,
        shared_link_id: SharedLinkId,
        album_ids: &HashSet<AlbumId>,
    ) -> AppResult<HashSet<AlbumId>>;

    /// Shared links owned by `user_id`.
    async fn shared_link_owner_access(
        &self,
        user_id: UserId,
        shared_link_ids: &HashSet<SharedLinkId>,
    ) -> AppResult<HashSet<SharedLinkId>>;
}
