use serde::Serialize;

/// Represents an account in the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Unique login name, fixed at creation
    username: String,
    /// Opaque credential, compared by exact equality
    #[serde(skip_serializing)]
    password: String,
    /// Contact address; `None` when the account has no email
    email: Option<String>,
}

impl User {
    /// Create a new user instance.
    ///
    /// An empty email is stored as `None` so that accounts without an
    /// address never collide with each other.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: email.filter(|email| !email.is_empty()),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Check a candidate password against the stored one
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    // Only the store may reassign the email, it owns the email index.
    pub(crate) fn replace_email(&mut self, email: String) -> Option<String> {
        self.email.replace(email)
    }
}
