//! Album membership roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Role a user holds on an album shared with them.
///
/// Ordered by privilege: Editor > Viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(
    feature = "sqlx",
    sqlx(type_name = "album_user_role", rename_all = "lowercase")
)]
#[serde(rename_all = "lowercase")]
pub enum AlbumUserRole {
    /// May add and remove assets.
    Editor,
    /// Read-only access.
    Viewer,
}

impl AlbumUserRole {
    /// Return the privilege level (higher = more privileged).
    pub fn privilege_level(&self) -> u8 {
        match self {
            Self::Editor => 2,
            Self::Viewer => 1,
        }
    }

    /// Check if this role grants at least the given role's privileges.
    pub fn has_at_least(&self, required: &AlbumUserRole) -> bool {
        self.privilege_level() >= required.privilege_level()
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Editor => "editor",
            Self::Viewer => "viewer",
        }
    }
}

impl fmt::Display for AlbumUserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AlbumUserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "editor" => Ok(Self::Editor),
            "viewer" => Ok(Self::Viewer),
            _ => Err(AppError::validation(format!("Invalid album user role: {s}"))),
        }
    }
}
