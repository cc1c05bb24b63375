//! Session store - registration, login and logout against local storage.
//!
//! ## Records
//!
//! - `registeredUser` holds the single registered identity. A new
//!   registration overwrites it; logout leaves it alone.
//! - `userInfo` holds the active session. Its presence is what the UI uses
//!   to decide whether the user is logged in.
//!
//! ## Ordering
//!
//! Registration writes `registeredUser` first and `userInfo` only after that
//! write succeeds. The in-memory state changes only after every write for
//! the operation has landed, so a failed call leaves the state observed
//! before it started.
//!
//! Every operation runs under one async mutex. Two calls issued back to back
//! cannot interleave their reads and writes; the second sees the first's
//! result.

use crate::{AuthError, AuthResult, AuthState, KeyValueStore};

use pocket_core::{Credentials, REGISTERED_USER_KEY, SESSION_KEY, SessionRecord, UserRecord};

use log::{debug, error, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::{Mutex, watch};

pub struct SessionStore<S> {
    storage: S,
    op_lock: Mutex<()>,
    state_tx: watch::Sender<AuthState>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Wraps `storage`. The state starts `LoggedOut` until [`restore`](Self::restore) runs.
    pub fn new(storage: S) -> Self {
        let (state_tx, _) = watch::channel(AuthState::LoggedOut);
        Self {
            storage,
            op_lock: Mutex::new(()),
            state_tx,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current authentication state.
    pub fn state(&self) -> AuthState {
        self.state_tx.borrow().clone()
    }

    /// Active session, if logged in.
    pub fn current(&self) -> Option<SessionRecord> {
        self.state_tx.borrow().session().cloned()
    }

    /// Watch state transitions.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state_tx.subscribe()
    }

    /// Reads the persisted session at startup.
    ///
    /// Never fails: a read or parse error is logged and treated as
    /// "no session".
    pub async fn restore(&self) -> Option<SessionRecord> {
        let _guard = self.op_lock.lock().await;
        self.state_tx.send_replace(AuthState::LoggingIn);

        let session = match self.read_record::<SessionRecord>(SESSION_KEY).await {
            Ok(Some(session)) => {
                info!("Restored session");
                Some(session)
            }
            Ok(None) => {
                info!("No persisted session (logged out)");
                None
            }
            Err(e) => {
                warn!("Failed to restore session, starting logged out: {e}");
                None
            }
        };

        let state = match &session {
            Some(session) => AuthState::LoggedIn(session.clone()),
            None => AuthState::LoggedOut,
        };
        self.state_tx.send_replace(state);

        session
    }

    /// Registers a new identity and logs it in.
    ///
    /// The email is lower-cased and trimmed; name and password are stored
    /// as given. Any previous registration is overwritten.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> AuthResult<SessionRecord> {
        let _guard = self.op_lock.lock().await;
        let previous = self.state_tx.send_replace(AuthState::LoggingIn);

        let result = self.register_locked(name, email, password).await;
        self.finish(previous, &result);
        result
    }

    /// Checks credentials against the registered identity and logs it in.
    ///
    /// A missing registration is reported exactly like a wrong password.
    pub async fn authenticate(&self, email: &str, password: &str) -> AuthResult<SessionRecord> {
        let _guard = self.op_lock.lock().await;
        let previous = self.state_tx.send_replace(AuthState::LoggingIn);

        let result = self.authenticate_locked(email, password).await;
        self.finish(previous, &result);
        result
    }

    /// Logs out. The registered identity survives.
    ///
    /// Idempotent: clearing without a session succeeds.
    pub async fn clear(&self) -> AuthResult<()> {
        let _guard = self.op_lock.lock().await;

        match self.storage.remove(SESSION_KEY).await {
            Ok(()) => {
                self.state_tx.send_replace(AuthState::LoggedOut);
                info!("Session cleared");
                Ok(())
            }
            Err(e) => {
                error!("Failed to clear session: {e}");
                Err(e.into())
            }
        }
    }

    async fn register_locked(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> AuthResult<SessionRecord> {
        let user = UserRecord::new(name, email, password);

        self.write_record(REGISTERED_USER_KEY, &user).await?;

        let session = SessionRecord::from(user);
        self.write_record(SESSION_KEY, &session).await?;

        info!("Registered new user and opened session");
        Ok(session)
    }

    async fn authenticate_locked(&self, email: &str, password: &str) -> AuthResult<SessionRecord> {
        let credentials = Credentials::new(email, password);
        debug!("Attempting login with: {}", credentials.email());

        let Some(user) = self.read_record::<UserRecord>(REGISTERED_USER_KEY).await? else {
            info!("No registered user found in storage");
            return Err(AuthError::credential_mismatch());
        };

        if !credentials.matches(&user) {
            warn!("Invalid credentials");
            return Err(AuthError::credential_mismatch());
        }

        let session = SessionRecord::from(user);
        self.write_record(SESSION_KEY, &session).await?;

        info!("Login successful");
        Ok(session)
    }

    /// Publishes the post-operation state.
    fn finish(&self, previous: AuthState, result: &AuthResult<SessionRecord>) {
        match result {
            Ok(session) => {
                self.state_tx
                    .send_replace(AuthState::LoggedIn(session.clone()));
            }
            Err(_) => {
                self.state_tx.send_replace(previous);
            }
        }
    }

    async fn read_record<T: DeserializeOwned>(&self, key: &str) -> AuthResult<Option<T>> {
        let Some(raw) = self.storage.get(key).await? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| AuthError::corrupted(key, e.to_string()))
    }

    async fn write_record<T: Serialize>(&self, key: &str, record: &T) -> AuthResult<()> {
        let json = serde_json::to_string(record)?;
        self.storage.set(key, &json).await?;
        Ok(())
    }
}
