//! Permission definitions checked by the access gate.

pub mod action;

pub use action::Permission;
