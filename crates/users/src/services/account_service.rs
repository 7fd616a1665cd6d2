//! Account service for login, registration and email changes.

use tracing::{info, warn};

use crate::entities::User;
use crate::repositories::UserStore;

/// Service for managing account operations on top of a user repository
pub struct AccountService<R> {
    user_repository: R,
}

impl<R> AccountService<R>
where
    R: UserRepo,
{
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }

    /// Borrow the underlying repository
    pub fn repository(&self) -> &R {
        &self.user_repository
    }

    /// Hand the repository back to the caller
    pub fn into_inner(self) -> R {
        self.user_repository
    }

    /// Check a password for the account with the given username
    pub fn authenticate_by_username(&self, username: &str, password: &str) -> bool {
        let authenticated = self
            .user_repository
            .find_by_username(username)
            .is_some_and(|user| user.password_matches(password));

        if !authenticated {
            warn!(username, "authentication by username failed");
        }
        authenticated
    }

    /// Check a password for the account with the given email
    pub fn authenticate_by_email(&self, email: &str, password: &str) -> bool {
        let authenticated = self
            .user_repository
            .find_by_email(email)
            .is_some_and(|user| user.password_matches(password));

        if !authenticated {
            warn!("authentication by email failed");
        }
        authenticated
    }

    /// Register a new account. An empty email registers the account without one.
    pub fn register(&mut self, username: &str, password: &str, email: &str) -> bool {
        let user = User::new(username, password, Some(email.to_string()));
        let created = self.user_repository.add(user);

        if created {
            info!(username, "registered account");
        }
        created
    }

    pub fn deregister(&mut self, username: &str) -> bool {
        let removed = self.user_repository.remove(username);

        if removed {
            info!(username, "deregistered account");
        }
        removed
    }

    pub fn list_accounts(&self) -> Vec<User> {
        self.user_repository.list_all()
    }

    pub fn update_email(&mut self, username: &str, new_email: &str) -> bool {
        let updated = self.user_repository.change_email(username, new_email);

        if updated {
            info!(username, "updated account email");
        }
        updated
    }
}

/// Trait for user repositories to allow generic usage
pub trait UserRepo {
    fn find_by_username(&self, username: &str) -> Option<&User>;
    fn find_by_email(&self, email: &str) -> Option<&User>;
    fn add(&mut self, user: User) -> bool;
    fn remove(&mut self, username: &str) -> bool;
    fn change_email(&mut self, username: &str, new_email: &str) -> bool;
    fn list_all(&self) -> Vec<User>;
}

impl UserRepo for UserStore {
    fn find_by_username(&self, username: &str) -> Option<&User> {
        self.find_by_username(username)
    }

    fn find_by_email(&self, email: &str) -> Option<&User> {
        self.find_by_email(email)
    }

    fn add(&mut self, user: User) -> bool {
        self.add(user)
    }

    fn remove(&mut self, username: &str) -> bool {
        self.remove(username)
    }

    fn change_email(&mut self, username: &str, new_email: &str) -> bool {
        self.change_email(username, new_email)
    }

    fn list_all(&self) -> Vec<User> {
        self.list_all()
    }
}

// Lets a service borrow a store the caller keeps ownership of.
impl<T> UserRepo for &mut T
where
    T: UserRepo + ?Sized,
{
    fn find_by_username(&self, username: &str) -> Option<&User> {
        (**self).find_by_username(username)
    }

    fn find_by_email(&self, email: &str) -> Option<&User> {
        (**self).find_by_email(email)
    }

    fn add(&mut self, user: User) -> bool {
        (**self).add(user)
    }

    fn remove(&mut self, username: &str) -> bool {
        (**self).remove(username)
    }

    fn change_email(&mut self, username: &str, new_email: &str) -> bool {
        (**self).change_email(username, new_email)
    }

    fn list_all(&self) -> Vec<User> {
        (**self).list_all()
    }
}
