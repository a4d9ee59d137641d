//! Repository traits and their PostgreSQL implementations.

pub mod access;
pub mod album;
pub mod album_asset;
pub mod asset;
pub mod shared_link;
pub mod shared_link_asset;

pub use access::PgAccessRepository;
pub use album::{AlbumRepository, PgAlbumRepository};
pub use album_asset::PgAlbumAssetRepository;
pub use asset::{AssetRepository, PgAssetRepository};
pub use shared_link::{PgSharedLinkRepository, SharedLinkRepository};
pub use shared_link_asset::PgSharedLinkAssetRepository;
