//! The contract every stored entity fulfils.

use super::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named collection an entity lives in.
///
/// Projects and teams share one Rust type, so the kind travels with the
/// repository rather than with the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Work items shown on the board.
    Task,
    /// Project groupings.
    Project,
    /// Team groupings.
    Team,
}

impl EntityKind {
    /// Returns the lowercase name used in messages and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Project => "project",
            Self::Team => "team",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record owned by an entity repository.
///
/// Entities are built from a validated [`Entity::Draft`] once the repository
/// has allocated an identifier, and afterwards only change through
/// [`Entity::Patch`] values. Both hooks receive the mutation timestamp so
/// that time-derived fields stay consistent with the write that produced
/// them.
pub trait Entity: Clone + fmt::Debug + Send + Sync + 'static {
    /// Fields supplied when creating the entity.
    type Draft: fmt::Debug + Send + 'static;

    /// Partial update applied over an existing entity.
    type Patch: fmt::Debug + Send + 'static;

    /// Builds a new entity with an allocated identifier.
    fn from_draft(id: EntityId, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    /// Merges a patch over this entity.
    fn apply_patch(&mut self, patch: Self::Patch, now: DateTime<Utc>);

    /// Returns the entity identifier.
    fn id(&self) -> EntityId;

    /// Returns the creation timestamp.
    fn created_at(&self) -> DateTime<Utc>;
}
