//! Group entity shared by the project and team collections.

use super::{GroupColor, GroupDomainError};
use crate::store::domain::{Entity, EntityId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Validated, non-empty project or team name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GroupName(String);

impl GroupName {
    /// Creates a name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`GroupDomainError::EmptyName`] when nothing remains after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, GroupDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GroupDomainError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for GroupName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A project or team.
///
/// `task_count` is a denormalized, informational counter. The repository
/// never keeps it in sync; live counts come from
/// [`crate::board::stats::CompletionStats`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    id: EntityId,
    name: GroupName,
    color: GroupColor,
    task_count: u32,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a group imported from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedGroupData {
    /// Stored identifier.
    pub id: EntityId,
    /// Stored name.
    pub name: GroupName,
    /// Stored color.
    pub color: GroupColor,
    /// Stored informational task counter.
    pub task_count: u32,
    /// Stored creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// Reconstructs a group from stored data.
    #[must_use]
    pub fn from_persisted(data: PersistedGroupData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            color: data.color,
            task_count: data.task_count,
            created_at: data.created_at,
        }
    }

    /// Returns the group identifier.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Returns the group name.
    #[must_use]
    pub const fn name(&self) -> &GroupName {
        &self.name
    }

    /// Returns the accent color.
    #[must_use]
    pub const fn color(&self) -> GroupColor {
        self.color
    }

    /// Returns the stored, non-authoritative task counter.
    #[must_use]
    pub const fn task_count(&self) -> u32 {
        self.task_count
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Group {
    type Draft = GroupDraft;
    type Patch = GroupPatch;

    fn from_draft(id: EntityId, draft: GroupDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            color: draft.color,
            task_count: 0,
            created_at: now,
        }
    }

    fn apply_patch(&mut self, patch: GroupPatch, _now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Fields supplied when creating a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDraft {
    name: GroupName,
    color: GroupColor,
}

impl GroupDraft {
    /// Creates a draft with the given name and color.
    #[must_use]
    pub const fn new(name: GroupName, color: GroupColor) -> Self {
        Self { name, color }
    }
}

/// Partial update for a group. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupPatch {
    name: Option<GroupName>,
    color: Option<GroupColor>,
}

impl GroupPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the name.
    #[must_use]
    pub fn with_name(mut self, name: GroupName) -> Self {
        self.name = Some(name);
        self
    }

    /// Replaces the color.
    #[must_use]
    pub const fn with_color(mut self, color: GroupColor) -> Self {
        self.color = Some(color);
        self
    }
}
