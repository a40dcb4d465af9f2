//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The minutes component of a time estimate is outside `0..=59`.
    #[error("invalid minutes {0}, expected a value between 0 and 59")]
    MinutesOutOfRange(u32),

    /// A task or user identifier is empty after trimming.
    #[error("identifier must not be empty")]
    EmptyIdentifier,
}

/// Error returned while parsing task statuses from persistence or drop
/// targets.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
