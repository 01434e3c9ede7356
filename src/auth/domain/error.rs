//! Error types for authentication input validation.

use thiserror::Error;

/// Errors returned while constructing authentication values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthDomainError {
    /// A required credential field is blank.
    #[error("{0} must not be empty")]
    MissingField(&'static str),

    /// The email address has no `@` separator.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),
}
