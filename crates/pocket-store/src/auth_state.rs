use pocket_core::SessionRecord;

/// Authentication state observed by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// No active session
    LoggedOut,
    /// A restore, register or authenticate call is in flight
    LoggingIn,
    /// Session active for this identity
    LoggedIn(SessionRecord),
}

impl AuthState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::LoggingIn)
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }

    pub fn session(&self) -> Option<&SessionRecord> {
        match self {
            Self::LoggedIn(session) => Some(session),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoggedOut => "logged_out",
            Self::LoggingIn => "logging_in",
            Self::LoggedIn(_) => "logged_in",
        }
    }
}
