//! Asset trash, restore, and statistics.

pub mod service;

pub use service::AssetService;
