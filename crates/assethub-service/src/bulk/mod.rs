//! Permission-checked bulk membership edits.

pub mod editor;

pub use editor::{BulkRepositories, add_assets, remove_assets, succeeded};
