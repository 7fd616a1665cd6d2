//! Domain entities for the user directory.
//!
//! These are pure domain objects without storage or transport concerns.

pub mod user;

pub use user::User;
