//! Storage contract for parents that own a set of assets.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::id::AssetId;

/// Membership storage for a parent entity (album, shared link) and its assets.
///
/// Implementations must keep membership unique per `(parent, asset)` pair.
/// `add_asset_ids` behaves as a set union and `remove_asset_ids` as a set
/// difference, so re-applying either call is harmless. Each call must apply
/// atomically to the ids it receives.
#[async_trait]
pub trait BulkAssetRepository: Send + Sync {
    /// Identifier type of the owning parent.
    type ParentId: Copy + Eq + Hash + fmt::Display + Send + Sync;

    /// Return the subset of `asset_ids` currently associated with `parent_id`.
    async fn get_asset_ids(
        &self,
        parent_id: Self::ParentId,
        asset_ids: &[AssetId],
    ) -> AppResult<HashSet<AssetId>>;

    /// Associate `asset_ids` with `parent_id` in a single write.
    async fn add_asset_ids(
        &self,
        parent_id: Self::ParentId,
        asset_ids: &[AssetId],
    ) -> AppResult<()>;

    /// Dissociate `asset_ids` from `parent_id` in a single write.
    async fn remove_asset_ids(
        &self,
        parent_id: Self::ParentId,
        asset_ids: &[AssetId],
    ) -> AppResult<()>;
}
