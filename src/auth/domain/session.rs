//! Users, sessions and credential payloads.

use super::{AuthDomainError, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// User identity returned by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Provider-assigned identifier.
    pub id: UserId,
    /// Sign-in email address.
    pub email: String,
    /// Display name captured at sign-up.
    pub full_name: Option<String>,
}

/// Active session for a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Signed-in user.
    pub user: AuthUser,
    /// Opaque bearer token issued by the provider.
    pub access_token: String,
}

/// Email and password pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Creates validated credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::MissingField`] for a blank email or
    /// password, or [`AuthDomainError::InvalidEmail`] when the email has no
    /// `@`.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, AuthDomainError> {
        let email = email.into().trim().to_owned();
        let password = password.into();
        if email.is_empty() {
            return Err(AuthDomainError::MissingField("email"));
        }
        if !email.contains('@') {
            return Err(AuthDomainError::InvalidEmail(email));
        }
        if password.is_empty() {
            return Err(AuthDomainError::MissingField("password"));
        }
        Ok(Self { email, password })
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Account registration payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    credentials: Credentials,
    full_name: String,
}

impl SignUpRequest {
    /// Creates a validated registration payload.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError`] when the credentials are invalid or the
    /// full name is blank.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Result<Self, AuthDomainError> {
        let credentials = Credentials::new(email, password)?;
        let full_name = full_name.into().trim().to_owned();
        if full_name.is_empty() {
            return Err(AuthDomainError::MissingField("full name"));
        }
        Ok(Self {
            credentials,
            full_name,
        })
    }

    /// Returns the credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the display name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}
