//! Core traits defined in `assethub-core` and implemented by other crates.

pub mod access;
pub mod bulk_asset;

pub use access::AccessRepository;
pub use bulk_asset::BulkAssetRepository;
