//! Album domain entities.

pub mod model;

pub use assethub_core::types::role::AlbumUserRole;
pub use model::{Album, AlbumUser};
