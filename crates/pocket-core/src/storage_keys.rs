//! Keys under which the records live in durable storage.
//!
//! These names are shared with previously installed builds of the app,
//! so changing them orphans existing registrations.

/// Key holding the registered identity (`UserRecord`).
pub const REGISTERED_USER_KEY: &str = "registeredUser";

/// Key holding the active session (`SessionRecord`).
pub const SESSION_KEY: &str = "userInfo";
