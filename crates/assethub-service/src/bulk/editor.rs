//! Bulk association editor.
//!
//! Both operations read the parent's membership once, ask the access gate
//! once, and issue at most one write covering every id that succeeded.
//! Per-id outcomes are reported in the returned list; only collaborator
//! failures surface as errors, and those abort before any write.

use std::collections::HashSet;

use tracing::info;

use assethub_auth::{AccessCore, AuthContext};
use assethub_core::result::AppResult;
use assethub_core::traits::BulkAssetRepository;
use assethub_core::types::id::AssetId;
use assethub_entity::bulk::{BulkIdErrorReason, BulkIdResponse, BulkIdsDto};
use assethub_entity::permission::Permission;

/// Collaborators of one bulk edit.
pub struct BulkRepositories<'a, R: ?Sized> {
    /// Access gate deciding which assets the principal may share.
    pub access: &'a AccessCore,
    /// Membership storage of the parent.
    pub repository: &'a R,
}

impl<'a, R: ?Sized> BulkRepositories<'a, R> {
    /// Bundle an access gate and a membership repository.
    pub fn new(access: &'a AccessCore, repository: &'a R) -> Self {
        Self { access, repository }
    }
}

/// Adds `dto.asset_ids` to the parent `dto.id`.
///
/// Returns one entry per requested id, in request order. An id already in
/// the parent, or repeated earlier in the same request, is a `duplicate`.
pub async fn add_assets<R>(
    auth: &AuthContext,
    repos: BulkRepositories<'_, R>,
    dto: &BulkIdsDto<R::ParentId>,
) -> AppResult<Vec<BulkIdResponse>>
where
    R: BulkAssetRepository + ?Sized,
{
    let parent_id = dto.id;
    let mut existing = repos
        .repository
        .get_asset_ids(parent_id, &dto.asset_ids)
        .await?;
    let not_present: HashSet<AssetId> = dto
        .asset_ids
        .iter()
        .filter(|id| !existing.contains(id))
        .copied()
        .collect();
    let allowed = repos
        .access
        .check_access(auth, Permission::AssetShare, not_present)
        .await?;

    let mut results = Vec::with_capacity(dto.asset_ids.len());
    let mut added = Vec::new();
    for &asset_id in &dto.asset_ids {
        if existing.contains(&asset_id) {
            results.push(BulkIdResponse::failed(asset_id, BulkIdErrorReason::Duplicate));
            continue;
        }

        if !allowed.contains(&asset_id) {
            results.push(BulkIdResponse::failed(asset_id, BulkIdErrorReason::NoPermission));
            continue;
        }

        existing.insert(asset_id);
        added.push(asset_id);
        results.push(BulkIdResponse::ok(asset_id));
    }

    if !added.is_empty() {
        repos.repository.add_asset_ids(parent_id, &added).await?;
    }

    info!(
        user_id = %auth.user_id,
        parent_id = %parent_id,
        requested = dto.asset_ids.len(),
        added = added.len(),
        "Bulk add applied"
    );

    Ok(results)
}

/// Removes `dto.asset_ids` from the parent `dto.id`.
///
/// Returns one entry per requested id, in request order. An id that is not
/// a member, or was already removed earlier in the same request, is
/// `not_found`.
pub async fn remove_assets<R>(
    auth: &AuthContext,
    repos: BulkRepositories<'_, R>,
    dto: &BulkIdsDto<R::ParentId>,
) -> AppResult<Vec<BulkIdResponse>>
where
    R: BulkAssetRepository + ?Sized,
{
    let parent_id = dto.id;
    let mut existing = repos
        .repository
        .get_asset_ids(parent_id, &dto.asset_ids)
        .await?;
    let allowed = repos
        .access
        .check_access(auth, Permission::AssetShare, existing.iter().copied())
        .await?;

    let mut results = Vec::with_capacity(dto.asset_ids.len());
    let mut removed = Vec::new();
    for &asset_id in &dto.asset_ids {
        if !existing.contains(&asset_id) {
            results.push(BulkIdResponse::failed(asset_id, BulkIdErrorReason::NotFound));
            continue;
        }

        if !allowed.contains(&asset_id) {
            results.push(BulkIdResponse::failed(asset_id, BulkIdErrorReason::NoPermission));
            continue;
        }

        existing.remove(&asset_id);
        removed.push(asset_id);
        results.push(BulkIdResponse::ok(asset_id));
    }

    if !removed.is_empty() {
        repos.repository.remove_asset_ids(parent_id, &removed).await?;
    }

    info!(
        user_id = %auth.user_id,
        parent_id = %parent_id,
        requested = dto.asset_ids.len(),
        removed = removed.len(),
        "Bulk remove applied"
    );

    Ok(results)
}

/// Ids of the successful entries, in result order.
pub fn succeeded(results: &[BulkIdResponse]) -> Vec<AssetId> {
    results
        .iter()
        .filter(|result| result.success)
        .map(|result| result.id)
        .collect()
}
