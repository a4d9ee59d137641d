//! Shared link asset lists.

pub mod service;

pub use service::SharedLinkService;
