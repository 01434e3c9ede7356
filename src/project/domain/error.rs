//! Error types for project and task validation and parsing.

use thiserror::Error;

/// Errors returned while building project and task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// A title is empty after trimming.
    #[error("title must not be empty")]
    EmptyTitle,

    /// A string identifier is not a UUID.
    #[error("invalid identifier '{0}'")]
    InvalidIdentifier(String),

    /// A drop target does not name a board column.
    #[error("unknown board column '{0}'")]
    UnknownColumn(String),
}

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
