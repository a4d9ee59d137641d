//! Asset domain entities.

pub mod model;
pub mod stats;

pub use model::{Asset, AssetType};
pub use stats::{AssetStats, AssetStatsOptions};
