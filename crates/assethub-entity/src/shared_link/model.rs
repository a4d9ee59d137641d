//! Shared link entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use assethub_core::types::id::{AlbumId, SharedLinkId, UserId};

/// What a shared link exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "shared_link_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SharedLinkType {
    /// The link exposes a whole album.
    Album,
    /// The link exposes its own hand-picked asset list.
    Individual,
}

/// A link granting anonymous access to an album or a set of assets.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SharedLink {
    /// Unique link identifier.
    pub id: SharedLinkId,
    /// User who created the link.
    pub user_id: UserId,
    /// Opaque key embedded in the public URL.
    #[serde(skip_serializing)]
    pub key: Vec<u8>,
    /// Link type.
    #[sqlx(rename = "type")]
    pub link_type: SharedLinkType,
    /// Album exposed by an album link.
    pub album_id: Option<AlbumId>,
    /// Whether visitors may upload into the linked album.
    pub allow_upload: bool,
    /// Whether visitors may download originals.
    pub allow_download: bool,
    /// When the link stops working.
    pub expires_at: Option<DateTime<Utc>>,
    /// When the link was created.
    pub created_at: DateTime<Utc>,
}

impl SharedLink {
    /// Whether the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|expires| expires <= Utc::now())
    }

    /// Whether the link carries its own asset list.
    pub fn is_individual(&self) -> bool {
        self.link_type == SharedLinkType::Individual
    }
}
