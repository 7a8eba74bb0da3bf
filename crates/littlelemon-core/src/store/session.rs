use anyhow::Result;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::models::{ProfileField, UserProfile};

use super::LocalStore;

/// Store key of the logged-in flag
pub const IS_LOGGED_IN_KEY: &str = "kIsLoggedIn";

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("{0} must not be empty")]
    EmptyField(ProfileField),

    #[error("Failed to save profile: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Registration and login state on top of the local store.
#[derive(Debug)]
pub struct Session {
    store: LocalStore,
}

impl Session {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.get_bool(IS_LOGGED_IN_KEY)
    }

    /// Save the profile and mark the session logged in.
    ///
    /// Rejected without touching the store if any field is empty.
    pub fn register(&mut self, profile: &UserProfile) -> Result<(), RegistrationError> {
        if let Some(field) = profile.first_empty_field() {
            return Err(RegistrationError::EmptyField(field));
        }

        let fields = ProfileField::ALL
            .into_iter()
            .map(|field| (field.key(), Value::from(profile.get(field))));
        self.store
            .set_many(fields.chain([(IS_LOGGED_IN_KEY, Value::from(true))]))?;

        info!("User registered");
        Ok(())
    }

    /// Clear the logged-in flag. Name and email stay in the store.
    pub fn logout(&mut self) -> Result<()> {
        self.store.set(IS_LOGGED_IN_KEY, false)?;
        info!("User logged out");
        Ok(())
    }

    /// Stored profile, with empty strings for anything never saved.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            first_name: self.store.get_string(ProfileField::FirstName.key()),
            last_name: self.store.get_string(ProfileField::LastName.key()),
            email: self.store.get_string(ProfileField::Email.key()),
        }
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> (tempfile::TempDir, Session) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        (dir, Session::new(store))
    }

    #[test]
    fn test_register_with_empty_field_is_rejected() {
        let (dir, mut session) = session();

        for profile in [
            UserProfile::new("", "Lemon", "t@l.com"),
            UserProfile::new("Tilly", "", "t@l.com"),
            UserProfile::new("Tilly", "Lemon", ""),
        ] {
            let err = session.register(&profile).unwrap_err();
            assert!(matches!(err, RegistrationError::EmptyField(_)));
        }

        assert!(!session.is_logged_in());
        assert_eq!(session.profile(), UserProfile::default());
        assert!(!dir.path().join("preferences.json").exists());
    }

    #[test]
    fn test_register_names_the_empty_field() {
        let (_dir, mut session) = session();
        let err = session
            .register(&UserProfile::new("Tilly", "", "t@l.com"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Last name must not be empty");
    }

    #[test]
    fn test_register_sets_all_fields() {
        let (_dir, mut session) = session();
        let profile = UserProfile::new("Tilly", "Lemon", "tilly@example.com");
        session.register(&profile).unwrap();

        assert!(session.is_logged_in());
        assert_eq!(session.profile(), profile);
        assert_eq!(session.store().get_string("first name key"), "Tilly");
        assert_eq!(session.store().get_string("last name key"), "Lemon");
        assert_eq!(session.store().get_string("e-mail key"), "tilly@example.com");
    }

    #[test]
    fn test_logout_keeps_profile() {
        let (_dir, mut session) = session();
        let profile = UserProfile::new("Tilly", "Lemon", "tilly@example.com");
        session.register(&profile).unwrap();
        session.logout().unwrap();

        assert!(!session.is_logged_in());
        assert_eq!(session.profile(), profile);
    }

    #[test]
    fn test_reregister_overwrites() {
        let (_dir, mut session) = session();
        session.register(&UserProfile::new("A", "B", "a@b.c")).unwrap();
        session.logout().unwrap();
        session.register(&UserProfile::new("C", "D", "c@d.e")).unwrap();

        assert!(session.is_logged_in());
        assert_eq!(session.profile(), UserProfile::new("C", "D", "c@d.e"));
    }

    #[test]
    fn test_failed_registration_write_keeps_previous_state() {
        let (dir, mut session) = session();
        let profile = UserProfile::new("Tilly", "Lemon", "tilly@example.com");
        session.register(&profile).unwrap();
        session.logout().unwrap();

        std::fs::create_dir(dir.path().join("preferences.json.tmp")).unwrap();
        let err = session
            .register(&UserProfile::new("Max", "Mint", "max@example.com"))
            .unwrap_err();
        assert!(matches!(err, RegistrationError::Storage(_)));

        assert!(!session.is_logged_in());
        assert_eq!(session.profile(), profile);
    }
}
