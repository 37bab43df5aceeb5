//! Error types for group domain validation.

use thiserror::Error;

/// Errors returned while constructing group domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GroupDomainError {
    /// The group name is empty after trimming.
    #[error("name must not be empty")]
    EmptyName,

    /// The color is not part of the palette.
    #[error("unknown color '{0}'")]
    UnknownColor(String),

    /// A stored timestamp is not RFC 3339.
    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),
}
