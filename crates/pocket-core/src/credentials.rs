//! Credential normalization and comparison.
//!
//! ## Normalization
//!
//! - email: lower-cased, then surrounding whitespace trimmed
//! - password: surrounding whitespace trimmed, case preserved
//!
//! Both the supplied credentials and the stored record go through the same
//! normalization before comparison.

use crate::UserRecord;

/// Lower-case and trim an email address.
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase().trim().to_string()
}

/// Trim a password. Case and inner whitespace are significant.
pub fn normalize_password(password: &str) -> String {
    password.trim().to_string()
}

/// Credentials supplied at login, already normalized.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: normalize_email(email),
            password: normalize_password(password),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Whether these credentials identify `user`.
    ///
    /// Exact equality on both fields after normalizing the stored values.
    pub fn matches(&self, user: &UserRecord) -> bool {
        normalize_email(&user.email) == self.email
            && normalize_password(&user.password) == self.password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
