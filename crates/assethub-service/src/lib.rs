//! # assethub-service
//!
//! Business logic for AssetHub. The bulk editor applies permission-checked
//! membership edits to any parent implementing
//! [`BulkAssetRepository`](assethub_core::traits::BulkAssetRepository); the
//! album, shared link, and asset services wrap it with parent-level checks
//! and bookkeeping.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod album;
pub mod asset;
pub mod bulk;
pub mod shared_link;

pub use album::AlbumService;
pub use asset::AssetService;
pub use assethub_auth::AuthContext;
pub use bulk::{BulkRepositories, add_assets, remove_assets};
pub use shared_link::SharedLinkService;
