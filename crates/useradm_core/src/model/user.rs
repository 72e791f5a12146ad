//! User domain model.
//!
//! # Responsibility
//! - Define the persisted user record and the insert request shape.
//! - Provide field validation used by repository write and read paths.
//!
//! # Invariants
//! - `id` is assigned by the store on insert and never changes afterwards.
//! - `username` and `email` are each unique across all records.
//! - `password` is stored verbatim; the source system defines no hashing or
//!   redaction, and none is invented here.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned surrogate key for a user record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = i64;

/// Validation failure for user fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyUsername,
    EmptyEmail,
    EmptyPassword,
}

impl Display for UserValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl Error for UserValidationError {}

/// Persisted user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Surrogate primary key, assigned by the store on insert.
    pub id: UserId,
    pub username: String,
    pub email: String,
    /// Stored and rendered verbatim; see module docs.
    pub password: String,
}

impl User {
    /// Validates field invariants of a persisted record.
    ///
    /// Read paths use this to reject invalid persisted state instead of
    /// masking it.
    pub fn validate(&self) -> Result<(), UserValidationError> {
        validate_fields(&self.username, &self.email, &self.password)
    }
}

/// Insert request for a user that does not exist yet.
///
/// Carries no `id`; the store assigns one when the record is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Validates the request before any SQL mutation.
    pub fn validate(&self) -> Result<(), UserValidationError> {
        validate_fields(&self.username, &self.email, &self.password)
    }
}

fn validate_fields(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), UserValidationError> {
    if username.is_empty() {
        return Err(UserValidationError::EmptyUsername);
    }
    if email.is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }
    if password.is_empty() {
        return Err(UserValidationError::EmptyPassword);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_with_all_fields_is_valid() {
        let user = NewUser::new("alice", "alice@mail.com", "secret");
        assert!(user.validate().is_ok());
    }

    #[test]
    fn empty_fields_are_rejected() {
        let missing_name = NewUser::new("", "a@mail.com", "x");
        assert_eq!(
            missing_name.validate(),
            Err(UserValidationError::EmptyUsername)
        );

        let missing_email = NewUser::new("a", "", "x");
        assert_eq!(missing_email.validate(), Err(UserValidationError::EmptyEmail));

        let missing_password = NewUser::new("a", "a@mail.com", "");
        assert_eq!(
            missing_password.validate(),
            Err(UserValidationError::EmptyPassword)
        );
    }

    #[test]
    fn user_serializes_with_plain_field_names() {
        let user = User {
            id: 1,
            username: "bob".to_string(),
            email: "bob@mail.com".to_string(),
            password: "bobpass".to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["username"], "bob");
        assert_eq!(json["email"], "bob@mail.com");
        assert_eq!(json["password"], "bobpass");
    }
}
