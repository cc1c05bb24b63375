//! Active session - a copy of the registered user while logged in.

use crate::UserRecord;

use std::fmt;

use serde::{Deserialize, Serialize};

/// The logged-in identity persisted under `userInfo`.
///
/// Same JSON shape as [`UserRecord`]. Only built from a `UserRecord`,
/// either on registration or after a successful credential check.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SessionRecord {
    /// The registered identity this session was opened for.
    pub fn user(&self) -> UserRecord {
        UserRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

impl From<UserRecord> for SessionRecord {
    fn from(user: UserRecord) -> Self {
        Self {
            name: user.name,
            email: user.email,
            password: user.password,
        }
    }
}

impl fmt::Debug for SessionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionRecord")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
