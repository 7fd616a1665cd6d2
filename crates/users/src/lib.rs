//! # User Directory Users Crate
//!
//! This crate provides the in-memory account directory: a user store indexed
//! by username and by email, and an account service for login, registration
//! and email changes on top of it.
//!
//! ## Architecture
//!
//! - **Entities**: Domain models (User)
//! - **Repositories**: The dual-index user store
//! - **Services**: Account operations over any [`UserRepo`]
//! - **Types**: Error definitions
//!
//! ## Usage
//!
//! ```rust
//! use userdir_users::{AccountService, User, UserStore};
//!
//! let store = UserStore::new(vec![User::new(
//!     "admin",
//!     "1234",
//!     Some("admin@gmail.com".to_string()),
//! )])?;
//!
//! let mut service = AccountService::new(store);
//! assert!(service.register("ali", "qwert", "ali@gmail.com"));
//! assert!(service.authenticate_by_email("ali@gmail.com", "qwert"));
//! # Ok::<(), userdir_users::StoreError>(())
//! ```
//!
//! The store is single-threaded. Callers sharing one across threads must
//! guard it with a single lock so both indexes change together.

pub mod entities;
pub mod repositories;
pub mod services;
pub mod types;

pub use entities::User;
pub use repositories::UserStore;
pub use services::{AccountService, UserRepo};
pub use types::{StoreError, StoreResult};
