use crate::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Message shown for both a wrong password and a missing registration.
pub const INCORRECT_CREDENTIALS: &str = "Incorrect credentials";

/// Failures surfaced by the session store.
///
/// None of these are fatal; every path hands control back to the caller.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Wrong email/password, or nobody has registered on this device yet.
    #[error("Incorrect credentials {location}")]
    CredentialMismatch { location: ErrorLocation },

    #[error("Storage error: {message} {location}")]
    Storage {
        message: String,
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Stored record '{key}' is corrupted: {message} {location}")]
    Corrupted {
        key: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize record: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Creates CredentialMismatch error at caller location.
    #[track_caller]
    pub fn credential_mismatch() -> Self {
        Self::CredentialMismatch {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Corrupted error at caller location.
    #[track_caller]
    pub fn corrupted(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Corrupted {
            key: key.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_credential_mismatch(&self) -> bool {
        matches!(self, Self::CredentialMismatch { .. })
    }

    /// Human-readable reason, without source locations.
    pub fn user_message(&self) -> String {
        match self {
            Self::CredentialMismatch { .. } => String::from(INCORRECT_CREDENTIALS),
            Self::Storage { message, .. } => message.clone(),
            Self::Corrupted { key, message, .. } => {
                format!("Stored record '{key}' is corrupted: {message}")
            }
            Self::Serialization { source, .. } => source.to_string(),
        }
    }

    /// User-friendly recovery hint.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::CredentialMismatch { .. } => "Check your email and password and try again.",
            Self::Storage { source, .. } => source.recovery_hint(),
            Self::Corrupted { .. } => {
                "Saved account data is unreadable. \
                   Sign up again to replace it."
            }
            Self::Serialization { .. } => {
                "Internal error preparing account data. \
                   Please report this issue."
            }
        }
    }
}

impl From<StoreError> for AuthError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Storage {
            message: source.user_message(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for AuthError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type AuthResult<T> = std::result::Result<T, AuthError>;
