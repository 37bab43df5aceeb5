//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing task domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// A task identifier payload is not a decimal integer.
    #[error("invalid task identifier '{0}', expected a decimal integer")]
    InvalidTaskId(String),

    /// A due date is not in `YYYY-MM-DD` form.
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),

    /// A stored timestamp is not RFC 3339.
    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),
}

/// Error returned while parsing a task status literal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing a task priority literal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
