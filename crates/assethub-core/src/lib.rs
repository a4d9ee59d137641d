//! # assethub-core
//!
//! Core crate for AssetHub. Contains the collaborator traits of the bulk
//! association layer, configuration schemas, typed identifiers,
//! pagination types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other AssetHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
