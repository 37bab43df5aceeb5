//! Task entity, its creation draft and its partial-update patch.

use super::{Priority, TaskDomainError, TaskStatus};
use crate::store::domain::{Entity, EntityId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::fmt;

/// Validated, non-empty task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a title, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when nothing remains after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A work item on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: EntityId,
    title: TaskTitle,
    description: String,
    status: TaskStatus,
    priority: Option<Priority>,
    project_id: Option<EntityId>,
    due_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a task imported from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Stored identifier.
    pub id: EntityId,
    /// Stored title.
    pub title: TaskTitle,
    /// Stored description.
    pub description: String,
    /// Stored status.
    pub status: TaskStatus,
    /// Stored priority, if any.
    pub priority: Option<Priority>,
    /// Referenced project or team, if any.
    pub project_id: Option<EntityId>,
    /// Stored due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Stored creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Stored completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Reconstructs a task from stored data.
    ///
    /// The completion timestamp is reconciled with the status: a done task
    /// without one falls back to its creation time, and any other status
    /// drops it.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        let completed_at = if data.status.is_done() {
            Some(data.completed_at.unwrap_or(data.created_at))
        } else {
            None
        };

        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            project_id: data.project_id,
            due_date: data.due_date,
            created_at: data.created_at,
            completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, which may be empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority, if one is set.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the referenced project or team.
    #[must_use]
    pub const fn project_id(&self) -> Option<EntityId> {
        self.project_id
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns when the task last entered `done`, if it is done.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns whether the task belongs to the given project or team.
    #[must_use]
    pub fn belongs_to(&self, group_id: EntityId) -> bool {
        self.project_id == Some(group_id)
    }

    fn sync_completion(&mut self, now: DateTime<Utc>) {
        self.completed_at = completion_timestamp(self.status, now);
    }
}

fn completion_timestamp(status: TaskStatus, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    status.is_done().then_some(now)
}

impl Entity for Task {
    type Draft = TaskDraft;
    type Patch = TaskPatch;

    fn from_draft(id: EntityId, draft: TaskDraft, now: DateTime<Utc>) -> Self {
        let mut task = Self {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            project_id: draft.project_id,
            due_date: draft.due_date,
            created_at: now,
            completed_at: None,
        };
        task.sync_completion(now);
        task
    }

    /// Applies the patch, then recomputes the completion timestamp from the
    /// resulting status whether or not the patch touched it.
    fn apply_patch(&mut self, patch: TaskPatch, now: DateTime<Utc>) {
        let TaskPatch {
            title,
            description,
            status,
            priority,
            project_id,
            due_date,
        } = patch;

        if let Some(value) = title {
            self.title = value;
        }
        if let Some(value) = description {
            self.description = value;
        }
        if let Some(value) = status {
            self.status = value;
        }
        if let Some(value) = priority {
            self.priority = value;
        }
        if let Some(value) = project_id {
            self.project_id = value;
        }
        if let Some(value) = due_date {
            self.due_date = value;
        }
        self.sync_completion(now);
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Fields supplied when creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: TaskTitle,
    description: String,
    status: TaskStatus,
    priority: Option<Priority>,
    project_id: Option<EntityId>,
    due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Creates a `todo` draft with an empty description.
    #[must_use]
    pub const fn new(title: TaskTitle) -> Self {
        Self {
            title,
            description: String::new(),
            status: TaskStatus::Todo,
            priority: None,
            project_id: None,
            due_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets or clears the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Option<Priority>) -> Self {
        self.priority = priority;
        self
    }

    /// Sets or clears the owning project or team.
    #[must_use]
    pub const fn with_project(mut self, project_id: Option<EntityId>) -> Self {
        self.project_id = project_id;
        self
    }

    /// Sets or clears the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }
}

/// Partial update for a task. Unset fields are left untouched.
///
/// Nullable fields take an `Option` so that a patch can clear them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<TaskTitle>,
    description: Option<String>,
    status: Option<TaskStatus>,
    priority: Option<Option<Priority>>,
    project_id: Option<Option<EntityId>>,
    due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a patch that only moves the task to another status.
    #[must_use]
    pub fn status_only(status: TaskStatus) -> Self {
        Self::new().with_status(status)
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Replaces or clears the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Option<Priority>) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces or clears the owning project or team.
    #[must_use]
    pub const fn with_project(mut self, project_id: Option<EntityId>) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Replaces or clears the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}
