//! # assethub-auth
//!
//! Authorization for AssetHub.
//!
//! ## Modules
//!
//! - `context`: the principal a request runs as (user or shared link)
//! - `access`: the access gate that filters id sets by permission

pub mod access;
pub mod context;

pub use access::AccessCore;
pub use context::AuthContext;
