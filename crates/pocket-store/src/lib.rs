//! Durable key-value storage and the session store built on top of it.

pub mod auth_error;
pub mod auth_outcome;
pub mod auth_state;
pub mod error;
pub mod file_store;
pub mod key_value_store;
pub mod memory_store;
pub mod session_store;

pub use auth_error::{AuthError, AuthResult, INCORRECT_CREDENTIALS};
pub use auth_outcome::AuthOutcome;
pub use auth_state::AuthState;
pub use error::{Result as StoreResult, StoreError};
pub use file_store::FileStore;
pub use key_value_store::KeyValueStore;
pub use memory_store::MemoryStore;
pub use session_store::SessionStore;

#[cfg(test)]
mod tests;
