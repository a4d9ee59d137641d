//! Request and response types of bulk membership edits.

pub mod dto;

pub use dto::{BulkIdErrorReason, BulkIdResponse, BulkIdsDto};
