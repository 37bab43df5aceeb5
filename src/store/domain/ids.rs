//! Integer identifiers allocated by repositories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a stored entity.
///
/// Identifiers are positive integers allocated by the owning repository and
/// never change after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    /// The identifier handed out for the first entity of an empty collection.
    pub const FIRST: Self = Self(1);

    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the identifier that follows this one, or `None` when the
    /// identifier space is exhausted.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when an identifier is not a decimal integer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid entity identifier: '{0}'")]
pub struct ParseEntityIdError(pub String);

impl FromStr for EntityId {
    type Err = ParseEntityIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(ParseEntityIdError(value.to_owned()));
        }
        trimmed
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ParseEntityIdError(value.to_owned()))
    }
}
