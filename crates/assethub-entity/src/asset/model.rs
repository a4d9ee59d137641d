//! Asset entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use assethub_core::types::id::{AssetId, LibraryId, UserId};

/// Media type of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "asset_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    /// Still image.
    Image,
    /// Video clip.
    Video,
    /// Audio recording.
    Audio,
    /// Anything else.
    Other,
}

/// A photo, video, or other media file owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Asset {
    /// Unique asset identifier.
    pub id: AssetId,
    /// Owning user.
    pub owner_id: UserId,
    /// Library the asset was imported from, if any.
    pub library_id: Option<LibraryId>,
    /// Media type.
    pub asset_type: AssetType,
    /// Path of the original file.
    pub original_path: String,
    /// Capture / file creation time.
    pub file_created_at: DateTime<Utc>,
    /// Row creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete timestamp (asset is in the trash when set).
    pub deleted_at: Option<DateTime<Utc>>,
    /// Hidden assets (e.g. the video half of a live photo) are not listed.
    pub is_visible: bool,
    /// Whether the asset is archived.
    pub is_archived: bool,
    /// Whether the asset is marked as a favorite.
    pub is_favorite: bool,
}

impl Asset {
    /// Whether the asset is in the trash.
    pub fn is_trashed(&self) -> bool {
        self.deleted_at.is_some()
    }
}
