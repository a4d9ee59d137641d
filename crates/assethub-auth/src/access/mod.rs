//! Batched permission checks over an [`AccessRepository`](assethub_core::traits::AccessRepository).

pub mod gate;

pub use gate::AccessCore;
