use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::EmailError;

/// Registered user record.
///
/// `password_hash` is always a salted PHC-format digest, never the plaintext
/// secret; comparison goes through the password hasher, never equality.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub fullname: Option<String>,
    pub email: EmailAddress,
    pub role: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub contact: Option<String>,
    pub country: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Email address type used as the login identifier.
///
/// Validates format using an RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Read-only projection of a user, safe to hand past the auth boundary.
/// Excludes all secret material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    pub fullname: Option<String>,
    pub email: String,
    pub role: Option<String>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            fullname: user.fullname.clone(),
            email: user.email.as_str().to_owned(),
            role: user.role.clone(),
        }
    }
}

/// Command to register a new user.
///
/// The password arrives in plaintext and is hashed by the service before
/// anything is persisted.
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub username: String,
    pub fullname: Option<String>,
    pub email: EmailAddress,
    pub role: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub contact: Option<String>,
    pub country: Option<String>,
    pub password: String,
}

/// Partial profile update; only the fields present are applied.
#[derive(Debug, Default)]
pub struct ProfilePatch {
    pub username: Option<String>,
    pub fullname: Option<String>,
    pub password: Option<String>,
}
