//! Shared link domain entities.

pub mod model;

pub use model::{SharedLink, SharedLinkType};
