//! Error types for the user directory.

use thiserror::Error;

/// Errors raised while building a store from an initial account list.
///
/// These indicate an inconsistent input list and are not meant to be retried.
/// Mutations on an existing store report failure through their return value
/// instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("Email already exists: {0}")]
    DuplicateEmail(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
