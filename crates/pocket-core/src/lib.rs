pub mod credentials;
pub mod session_record;
pub mod storage_keys;
pub mod user_record;

pub use credentials::{Credentials, normalize_email, normalize_password};
pub use session_record::SessionRecord;
pub use storage_keys::{REGISTERED_USER_KEY, SESSION_KEY};
pub use user_record::UserRecord;
