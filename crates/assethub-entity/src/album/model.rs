//! Album entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use assethub_core::types::id::{AlbumId, AssetId, UserId};
use assethub_core::types::role::AlbumUserRole;

/// A user-curated collection of assets.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Album {
    /// Unique album identifier.
    pub id: AlbumId,
    /// Owning user.
    pub owner_id: UserId,
    /// Display name.
    pub album_name: String,
    /// Free-form description.
    pub description: String,
    /// Asset shown as the album cover.
    pub album_thumbnail_asset_id: Option<AssetId>,
    /// When the album was created.
    pub created_at: DateTime<Utc>,
    /// Last time the album or its membership changed.
    pub updated_at: DateTime<Utc>,
}

/// A user an album is shared with.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AlbumUser {
    /// The shared album.
    pub album_id: AlbumId,
    /// The user it is shared with.
    pub user_id: UserId,
    /// What that user may do.
    pub role: AlbumUserRole,
}
