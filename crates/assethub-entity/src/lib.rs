//! # assethub-entity
//!
//! Domain entity models for AssetHub. Every struct in this crate represents
//! a database table row or a request/response value object. Database
//! entities derive `sqlx::FromRow`.

pub mod album;
pub mod asset;
pub mod bulk;
pub mod permission;
pub mod shared_link;
