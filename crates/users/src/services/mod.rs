//! Business logic services for the user directory.
//!
//! Services translate account operations into repository calls and hold no
//! state of their own beyond the repository they were given.

pub mod account_service;

pub use account_service::{AccountService, UserRepo};
