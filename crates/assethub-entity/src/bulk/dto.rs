//! Bulk id request/response DTOs.

use std::fmt;

use serde::{Deserialize, Serialize};

use assethub_core::types::id::AssetId;

/// Asset ids to add to or remove from the parent `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkIdsDto<P> {
    /// The owning parent (album, shared link).
    pub id: P,
    /// Requested asset ids, in caller order. Repeats are allowed.
    pub asset_ids: Vec<AssetId>,
}

impl<P> BulkIdsDto<P> {
    /// Create a new request.
    pub fn new(id: P, asset_ids: impl IntoIterator<Item = AssetId>) -> Self {
        Self {
            id,
            asset_ids: asset_ids.into_iter().collect(),
        }
    }
}

/// Why a single id could not be added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkIdErrorReason {
    /// Add requested for an id that is already a member.
    Duplicate,
    /// The principal may not act on this id.
    NoPermission,
    /// Remove requested for an id that is not a member.
    NotFound,
}

impl BulkIdErrorReason {
    /// Return the reason as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Duplicate => "duplicate",
            Self::NoPermission => "no_permission",
            Self::NotFound => "not_found",
        }
    }
}

impl fmt::Display for BulkIdErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome for one requested id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkIdResponse {
    /// The requested asset id.
    pub id: AssetId,
    /// Whether the edit was applied.
    pub success: bool,
    /// Failure reason, absent on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<BulkIdErrorReason>,
}

impl BulkIdResponse {
    /// A successful entry.
    pub fn ok(id: AssetId) -> Self {
        Self {
            id,
            success: true,
            error: None,
        }
    }

    /// A failed entry.
    pub fn failed(id: AssetId, reason: BulkIdErrorReason) -> Self {
        Self {
            id,
            success: false,
            error: Some(reason),
        }
    }
}
