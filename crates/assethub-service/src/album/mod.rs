//! Album membership and listing.

pub mod service;

pub use service::AlbumService;
