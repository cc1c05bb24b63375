//! Command dispatch - the screens of the shell, minus the pixels.

use crate::commands::Commands;
use crate::form_validator::FormValidator;

use pocket_config::ValidationConfig;
use pocket_core::SessionRecord;
use pocket_store::{AuthOutcome, AuthResult, KeyValueStore, SessionStore};

use serde::Serialize;
use tracing::{info, warn};

/// Alert shown when a login is rejected.
pub const INVALID_CREDENTIALS_ALERT: &str = "Invalid credentials";

const NOT_LOGGED_IN: &str = "Not logged in";

/// Logged-in user as shown to the terminal. The password never leaves the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub name: String,
    pub email: String,
}

impl From<&SessionRecord> for SessionView {
    fn from(session: &SessionRecord) -> Self {
        Self {
            name: session.name.clone(),
            email: session.email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusView {
    pub state: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OutputBody {
    Outcome(AuthOutcome),
    Session(SessionView),
    Status(StatusView),
}

/// Result of one command, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub body: OutputBody,
    pub success: bool,
    /// Message for stderr, in addition to the JSON body
    pub alert: Option<&'static str>,
    /// What the user can do about a storage failure, for stderr
    pub hint: Option<&'static str>,
}

impl CommandOutput {
    fn outcome(outcome: AuthOutcome) -> Self {
        Self {
            success: outcome.success,
            body: OutputBody::Outcome(outcome),
            alert: None,
            hint: None,
        }
    }

    fn from_result<T>(result: &AuthResult<T>) -> Self {
        let mut output = Self::outcome(AuthOutcome::from(result));
        if let Err(e) = result {
            if e.is_credential_mismatch() {
                output.alert = Some(INVALID_CREDENTIALS_ALERT);
            } else {
                output.hint = Some(e.recovery_hint());
            }
        }
        output
    }
}

pub struct App<S> {
    sessions: SessionStore<S>,
    validator: FormValidator,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(sessions: SessionStore<S>, validation: ValidationConfig) -> Self {
        Self {
            sessions,
            validator: FormValidator::new(validation),
        }
    }

    pub fn sessions(&self) -> &SessionStore<S> {
        &self.sessions
    }

    /// Restores the persisted session; decides which screens are reachable.
    pub async fn start(&self) {
        let restored = self.sessions.restore().await;
        info!("Starting {}", if restored.is_some() { "logged in" } else { "logged out" });
    }

    pub async fn execute(&self, command: Commands) -> CommandOutput {
        match command {
            Commands::Signup {
                name,
                email,
                password,
            } => self.signup(&name, &email, &password).await,
            Commands::Login { email, password } => self.login(&email, &password).await,
            Commands::Logout => self.logout().await,
            Commands::Whoami => self.whoami(),
            Commands::Status => self.status(),
        }
    }

    async fn signup(&self, name: &str, email: &str, password: &str) -> CommandOutput {
        if let Err(e) = self.validator.validate_signup(name, email, password) {
            info!("Signup form rejected on field '{}'", e.field());
            return CommandOutput::outcome(AuthOutcome::failure(e.to_string()));
        }

        let result = self.sessions.register(name, email, password).await;
        CommandOutput::from_result(&result)
    }

    async fn login(&self, email: &str, password: &str) -> CommandOutput {
        if let Err(e) = self.validator.validate_login(email, password) {
            info!("Login form rejected on field '{}'", e.field());
            return CommandOutput::outcome(AuthOutcome::failure(e.to_string()));
        }

        let result = self.sessions.authenticate(email.trim(), password).await;
        CommandOutput::from_result(&result)
    }

    async fn logout(&self) -> CommandOutput {
        let result = self.sessions.clear().await;
        if let Err(e) = &result {
            warn!("Logout failed: {e}");
        }
        CommandOutput::from_result(&result)
    }

    fn whoami(&self) -> CommandOutput {
        match self.sessions.current() {
            Some(session) => CommandOutput {
                body: OutputBody::Session(SessionView::from(&session)),
                success: true,
                alert: None,
                hint: None,
            },
            None => CommandOutput::outcome(AuthOutcome::failure(NOT_LOGGED_IN)),
        }
    }

    fn status(&self) -> CommandOutput {
        CommandOutput {
            body: OutputBody::Status(StatusView {
                state: self.sessions.state().as_str(),
            }),
            success: true,
            alert: None,
            hint: None,
        }
    }
}
