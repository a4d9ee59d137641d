//! Permission action definitions.

use serde::{Deserialize, Serialize};

/// Actions that can be checked against the access gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    // -- Asset actions --
    /// View an asset.
    AssetRead,
    /// Put an asset into an album or shared link.
    AssetShare,
    /// Move an asset to the trash or restore it.
    AssetDelete,

    // -- Album actions --
    /// View an album and its contents.
    AlbumRead,
    /// Add assets to an album.
    AlbumAddAsset,
    /// Remove assets from an album.
    AlbumRemoveAsset,

    // -- Shared link actions --
    /// Modify a shared link, including its asset list.
    SharedLinkUpdate,
}

impl Permission {
    /// Return the action as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AssetRead => "asset.read",
            Self::AssetShare => "asset.share",
            Self::AssetDelete => "asset.delete",
            Self::AlbumRead => "album.read",
            Self::AlbumAddAsset => "album.addAsset",
            Self::AlbumRemoveAsset => "album.removeAsset",
            Self::SharedLinkUpdate => "sharedLink.update",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
