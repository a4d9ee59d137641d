//! In-memory stores for single-process deployments and tests.
//!
//! [`MemoryStore`] implements every repository trait over one shared state
//! guarded by a `tokio::sync::RwLock`. Membership writes have the same
//! set-union / set-difference semantics as the PostgreSQL repositories.

pub mod membership;
pub mod store;

pub use membership::{MemoryAlbumAssets, MemorySharedLinkAssets};
pub use store::MemoryStore;
