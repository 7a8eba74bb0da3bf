use std::fmt;

use serde::{Deserialize, Serialize};

/// Registration data kept in the local store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl UserProfile {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Email => &self.email,
        }
    }

    /// First field that is empty, in form order.
    pub fn first_empty_field(&self) -> Option<ProfileField> {
        ProfileField::ALL
            .into_iter()
            .find(|&field| self.get(field).is_empty())
    }
}

/// The string-valued profile fields, each with its fixed store key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
}

impl ProfileField {
    pub const ALL: [ProfileField; 3] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::Email,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ProfileField::FirstName => "first name key",
            ProfileField::LastName => "last name key",
            ProfileField::Email => "e-mail key",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::FirstName => "First name",
            ProfileField::LastName => "Last name",
            ProfileField::Email => "Email",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_empty_field() {
        assert_eq!(UserProfile::new("Tilly", "Lemon", "t@l.com").first_empty_field(), None);
        assert_eq!(
            UserProfile::new("", "", "t@l.com").first_empty_field(),
            Some(ProfileField::FirstName)
        );
        assert_eq!(
            UserProfile::new("Tilly", "Lemon", "").first_empty_field(),
            Some(ProfileField::Email)
        );
    }

    #[test]
    fn test_keys_are_distinct() {
        let keys: std::collections::HashSet<_> =
            ProfileField::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys.len(), ProfileField::ALL.len());
    }
}
