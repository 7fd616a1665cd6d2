//! In-memory user store indexed by username and by email.

use std::collections::HashMap;

use tracing::debug;

use crate::entities::User;
use crate::types::{StoreError, StoreResult};

/// Owns every [`User`] in the directory and keeps both lookup indexes in step.
///
/// Invariants held between calls:
/// - at most one user per username;
/// - at most one user per email, accounts without an email are not indexed;
/// - the email index maps exactly the current email of every user that has
///   one to that user's username.
///
/// Mutations check every precondition before touching either map, so a
/// rejected call leaves the store unchanged.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users_by_username: HashMap<String, User>,
    usernames_by_email: HashMap<String, String>,
}

impl UserStore {
    /// Build a store from an initial account list, in input order.
    ///
    /// Fails on the first entry whose username or email is already taken by
    /// an earlier entry.
    pub fn new(users: impl IntoIterator<Item = User>) -> StoreResult<Self> {
        let mut store = Self::default();

        for user in users {
            if store.contains_username(user.username()) {
                return Err(StoreError::DuplicateUsername(user.username().to_string()));
            }
            if let Some(email) = user.email() {
                if store.contains_email(email) {
                    return Err(StoreError::DuplicateEmail(email.to_string()));
                }
            }
            store.insert(user);
        }

        debug!(count = store.count(), "built user store");
        Ok(store)
    }

    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users_by_username.get(username)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.usernames_by_email
            .get(email)
            .and_then(|username| self.users_by_username.get(username))
    }

    pub fn contains_username(&self, username: &str) -> bool {
        self.users_by_username.contains_key(username)
    }

    pub fn contains_email(&self, email: &str) -> bool {
        self.usernames_by_email.contains_key(email)
    }

    /// Insert a new user.
    ///
    /// Returns `false` without mutating anything when the username is taken
    /// or the user's email belongs to another account.
    pub fn add(&mut self, user: User) -> bool {
        if self.contains_username(user.username()) {
            debug!(username = user.username(), "rejected add: username taken");
            return false;
        }
        if user.email().is_some_and(|email| self.contains_email(email)) {
            debug!(username = user.username(), "rejected add: email taken");
            return false;
        }

        debug!(username = user.username(), "adding user");
        self.insert(user);
        true
    }

    /// Remove a user and its email index entry. Returns `false` if unknown.
    pub fn remove(&mut self, username: &str) -> bool {
        let Some(user) = self.users_by_username.remove(username) else {
            debug!(username, "rejected remove: unknown username");
            return false;
        };

        if let Some(email) = user.email() {
            self.usernames_by_email.remove(email);
        }

        debug!(username, "removed user");
        true
    }

    pub fn count(&self) -> usize {
        self.users_by_username.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users_by_username.is_empty()
    }

    /// Reassign a user's email.
    ///
    /// Returns `false` when the user is unknown, the new email is empty, or
    /// the new email is already in the email index. That includes the user's
    /// own current email, which is rejected like any other taken address.
    pub fn change_email(&mut self, username: &str, new_email: &str) -> bool {
        if new_email.is_empty() {
            debug!(username, "rejected email change: empty email");
            return false;
        }

        let Some(user) = self.users_by_username.get_mut(username) else {
            debug!(username, "rejected email change: unknown username");
            return false;
        };

        if self.usernames_by_email.contains_key(new_email) {
            debug!(username, "rejected email change: email taken");
            return false;
        }

        if let Some(old_email) = user.replace_email(new_email.to_string()) {
            self.usernames_by_email.remove(&old_email);
        }
        self.usernames_by_email
            .insert(new_email.to_string(), username.to_string());

        debug!(username, "changed user email");
        true
    }

    /// Snapshot of every user, in no particular order.
    pub fn list_all(&self) -> Vec<User> {
        self.users_by_username.values().cloned().collect()
    }

    // Callers have already checked both keys are free.
    fn insert(&mut self, user: User) {
        if let Some(email) = user.email() {
            self.usernames_by_email
                .insert(email.to_string(), user.username().to_string());
        }
        self.users_by_username
            .insert(user.username().to_string(), user);
    }
}
