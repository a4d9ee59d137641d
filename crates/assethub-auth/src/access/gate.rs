//! Access gate: narrows an id set to the ids a principal may act on.

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_core::traits::AccessRepository;
use assethub_core::types::id::{AlbumId, AssetId, SharedLinkId, UserId};
use assethub_core::types::role::AlbumUserRole;
use assethub_entity::permission::Permission;
use assethub_entity::shared_link::SharedLink;

use crate::context::AuthContext;

/// Resolves permissions for batches of ids.
///
/// Each grant source is queried only with the ids no earlier source has
/// already granted, so a fully owned batch costs a single query.
#[derive(Clone)]
pub struct AccessCore {
    repo: Arc<dyn AccessRepository>,
}

impl std::fmt::Debug for AccessCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessCore").finish_non_exhaustive()
    }
}

impl AccessCore {
    /// Creates a new access gate.
    pub fn new(repo: Arc<dyn AccessRepository>) -> Self {
        Self { repo }
    }

    /// Returns the subset of `ids` that `auth` holds `permission` on.
    ///
    /// An empty input returns an empty set without querying the repository.
    pub async fn check_access<I>(
        &self,
        auth: &AuthContext,
        permission: Permission,
        ids: impl IntoIterator<Item = I>,
    ) -> AppResult<HashSet<I>>
    where
        I: Copy + Eq + Hash + Into<Uuid> + From<Uuid> + Send + Sync,
    {
        let ids: HashSet<Uuid> = ids.into_iter().map(Into::into).collect();
        if ids.is_empty() {
            return Ok(HashSet::new());
        }

        let allowed = match &auth.shared_link {
            Some(link) => self.check_shared_link_access(link, permission, &ids).await?,
            None => self.check_user_access(auth.user_id, permission, &ids).await?,
        };

        debug!(
            user_id = %auth.user_id,
            permission = %permission,
            requested = ids.len(),
            allowed = allowed.len(),
            "Access checked"
        );

        Ok(allowed.into_iter().map(I::from).collect())
    }

    /// Fails with an authorization error unless `auth` holds `permission` on
    /// every id.
    pub async fn require_access<I>(
        &self,
        auth: &AuthContext,
        permission: Permission,
        ids: impl IntoIterator<Item = I>,
    ) -> AppResult<()>
    where
        I: Copy + Eq + Hash + Into<Uuid> + From<Uuid> + Send + Sync,
    {
        let ids: HashSet<I> = ids.into_iter().collect();
        let allowed = self
            .check_access(auth, permission, ids.iter().copied())
            .await?;

        if allowed.len() != ids.len() {
            return Err(AppError::authorization(format!(
                "Not found or no {permission} access"
            )));
        }
        Ok(())
    }

    async fn check_shared_link_access(
        &self,
        link: &SharedLink,
        permission: Permission,
        ids: &HashSet<Uuid>,
    ) -> AppResult<HashSet<Uuid>> {
        if link.is_expired() {
            return Ok(HashSet::new());
        }

        match permission {
            Permission::AssetRead => {
                let granted = self
                    .repo
                    .asset_shared_link_access(link.id, &typed::<AssetId>(ids))
                    .await?;
                Ok(untyped(granted))
            }
            Permission::AssetShare => {
                let granted = self
                    .repo
                    .asset_owner_access(link.user_id, &typed::<AssetId>(ids))
                    .await?;
                Ok(untyped(granted))
            }
            Permission::AlbumRead => self.linked_album(link.id, ids).await,
            Permission::AlbumAddAsset if link.allow_upload => self.linked_album(link.id, ids).await,
            _ => Ok(HashSet::new()),
        }
    }

    async fn linked_album(
        &self,
        shared_link_id: SharedLinkId,
        ids: &HashSet<Uuid>,
    ) -> AppResult<HashSet<Uuid>> {
        let granted = self
            .repo
            .album_shared_link_access(shared_link_id, &typed::<AlbumId>(ids))
            .await?;
        Ok(untyped(granted))
    }

    async fn check_user_access(
        &self,
        user_id: UserId,
        permission: Permission,
        ids: &HashSet<Uuid>,
    ) -> AppResult<HashSet<Uuid>> {
        match permission {
            Permission::AssetRead | Permission::AssetShare | Permission::AssetDelete => {
                let granted = self
                    .check_asset_access(user_id, permission, typed(ids))
                    .await?;
                Ok(untyped(granted))
            }
            Permission::AlbumRead => {
                let granted = self
                    .check_album_access(user_id, AlbumUserRole::Viewer, typed(ids))
                    .await?;
                Ok(untyped(granted))
            }
            Permission::AlbumAddAsset | Permission::AlbumRemoveAsset => {
                let granted = self
                    .check_album_access(user_id, AlbumUserRole::Editor, typed(ids))
                    .await?;
                Ok(untyped(granted))
            }
            Permission::SharedLinkUpdate => {
                let granted = self
                    .repo
                    .shared_link_owner_access(user_id, &typed::<SharedLinkId>(ids))
                    .await?;
                Ok(untyped(granted))
            }
        }
    }

    async fn check_asset_access(
        &self,
        user_id: UserId,
        permission: Permission,
        ids: HashSet<AssetId>,
    ) -> AppResult<HashSet<AssetId>> {
        let mut allowed = self.repo.asset_owner_access(user_id, &ids).await?;
        let mut pending = pending(&ids, &allowed);

        if permission == Permission::AssetDelete || pending.is_empty() {
            return Ok(allowed);
        }

        if permission == Permission::AssetRead {
            let granted = self.repo.asset_album_access(user_id, &pending).await?;
            pending.retain(|id| !granted.contains(id));
            allowed.extend(granted);
        }

        if !pending.is_empty() {
            allowed.extend(self.repo.asset_partner_access(user_id, &pending).await?);
        }

        Ok(allowed)
    }

    async fn check_album_access(
        &self,
        user_id: UserId,
        minimum: AlbumUserRole,
        ids: HashSet<AlbumId>,
    ) -> AppResult<HashSet<AlbumId>> {
        let mut allowed = self.repo.album_owner_access(user_id, &ids).await?;
        let pending = pending(&ids, &allowed);

        if !pending.is_empty() {
            allowed.extend(
                self.repo
                    .album_shared_access(user_id, &pending, minimum)
                    .await?,
            );
        }

        Ok(allowed)
    }
}

fn pending<I: Copy + Eq + Hash>(ids: &HashSet<I>, allowed: &HashSet<I>) -> HashSet<I> {
    ids.difference(allowed).copied().collect()
}

fn typed<I: Eq + Hash + From<Uuid>>(ids: &HashSet<Uuid>) -> HashSet<I> {
    ids.iter().copied().map(I::from).collect()
}

fn untyped<I: Into<Uuid>>(ids: HashSet<I>) -> HashSet<Uuid> {
    ids.into_iter().map(Into::into).collect()
}
