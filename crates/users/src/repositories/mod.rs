//! Storage layer for the user directory.
//!
//! The store is the only component allowed to mutate users or either of
//! its indexes.

pub mod user_store;

pub use user_store::UserStore;
