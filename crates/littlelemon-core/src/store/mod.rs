//! Durable key/value storage for session flags and profile fields.
//!
//! The store is a single JSON object on disk, rewritten on every `set`.
//! Absent keys read back as empty strings / `false`.

pub mod local;
pub mod session;

pub use local::LocalStore;
pub use session::{RegistrationError, Session, IS_LOGGED_IN_KEY};
