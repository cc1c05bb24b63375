use crate::AuthResult;

use serde::Serialize;

/// Success/failure view of a store operation, for the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthOutcome {
    pub fn success() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

impl<T> From<&AuthResult<T>> for AuthOutcome {
    fn from(result: &AuthResult<T>) -> Self {
        match result {
            Ok(_) => Self::success(),
            Err(e) => Self::failure(e.user_message()),
        }
    }
}
