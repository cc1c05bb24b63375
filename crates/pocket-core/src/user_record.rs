//! Registered identity - the single user known to this device.

use crate::normalize_email;

use std::fmt;

use serde::{Deserialize, Serialize};

/// The one registered user persisted under `registeredUser`.
///
/// Exactly one record exists at a time; a new registration replaces it.
/// The password is kept as plaintext, exactly as entered.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    /// Case-insensitive identity, stored lower-cased
    pub email: String,
    pub password: String,
}

impl UserRecord {
    /// Build the record for a fresh registration.
    ///
    /// The email is lower-cased and trimmed; name and password are kept verbatim.
    pub fn new(
        name: impl Into<String>,
        email: impl AsRef<str>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: normalize_email(email.as_ref()),
            password: password.into(),
        }
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
