//! Shared types for the user directory.

pub mod errors;

pub use errors::{StoreError, StoreResult};
