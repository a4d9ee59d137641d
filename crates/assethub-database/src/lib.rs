//! # assethub-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for AssetHub, plus in-memory stores implementing the
//! same traits for single-process use and tests.

pub mod connection;
pub mod memory;
pub mod repositories;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
