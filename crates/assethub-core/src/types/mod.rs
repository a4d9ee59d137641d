//! Core type definitions used across the AssetHub workspace.

pub mod id;
pub mod pagination;
pub mod role;

pub use id::*;
pub use pagination::{PageRequest, Paginated};
pub use role::AlbumUserRole;
