//! Per-owner asset statistics.

use serde::{Deserialize, Serialize};

use super::model::AssetType;

/// Filters applied when counting a user's assets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetStatsOptions {
    /// Restrict to archived (`Some(true)`) or non-archived (`Some(false)`) assets.
    pub is_archived: Option<bool>,
    /// Restrict to favorites or non-favorites.
    pub is_favorite: Option<bool>,
    /// Count trashed assets instead of live ones.
    #[serde(default)]
    pub is_trashed: bool,
}

/// Visible asset counts grouped by type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetStats {
    /// Number of images.
    pub images: u64,
    /// Number of videos.
    pub videos: u64,
    /// Number of audio files.
    pub audio: u64,
    /// Number of other assets.
    pub other: u64,
}

impl AssetStats {
    /// Add `count` assets of the given type.
    pub fn record(&mut self, asset_type: AssetType, count: u64) {
        match asset_type {
            AssetType::Image => self.images += count,
            AssetType::Video => self.videos += count,
            AssetType::Audio => self.audio += count,
            AssetType::Other => self.other += count,
        }
    }

    /// Total across all types.
    pub fn total(&self) -> u64 {
        self.images + self.videos + self.audio + self.other
    }
}
