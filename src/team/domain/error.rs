//! Error types for team member validation and parsing.

use thiserror::Error;

/// Errors returned while validating team member input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TeamDomainError {
    /// A required field is empty after trimming.
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Error returned while parsing employment statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown employment status: {0}")]
pub struct ParseEmploymentStatusError(pub String);
