//! Request payloads accepted from the presentation layer.
//!
//! Forms and the board speak in raw strings; these types carry that shape
//! into the service, which validates it into domain values before anything
//! reaches a repository.

use super::TaskLifecycleError;
use crate::store::domain::EntityId;
use crate::task::domain::{
    Priority, TaskDomainError, TaskDraft, TaskPatch, TaskStatus, TaskTitle,
};
use chrono::NaiveDate;

/// Parses a form due date, where the empty string means no due date.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDueDate`] when the value is neither
/// empty nor a `YYYY-MM-DD` date.
pub fn parse_due_date(value: &str) -> Result<Option<NaiveDate>, TaskDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| TaskDomainError::InvalidDueDate(value.to_owned()))
}

/// Task form submitted to create a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    status: Option<String>,
    priority: String,
    project_id: Option<u64>,
    due_date: String,
}

impl CreateTaskRequest {
    /// Creates a request with only a title; the status defaults to `todo`.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: None,
            priority: String::new(),
            project_id: None,
            due_date: String::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the status literal.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the priority literal; the empty string means unset.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Sets the owning project or team.
    #[must_use]
    pub const fn with_project(mut self, project_id: u64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Sets the due date literal (`YYYY-MM-DD`, or empty for none).
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = due_date.into();
        self
    }

    pub(super) fn into_draft(self) -> Result<TaskDraft, TaskLifecycleError> {
        let Self {
            title,
            description,
            status: status_literal,
            priority,
            project_id,
            due_date,
        } = self;

        let status = status_literal
            .as_deref()
            .map(TaskStatus::try_from)
            .transpose()?
            .unwrap_or_default();

        Ok(TaskDraft::new(TaskTitle::new(title)?)
            .with_description(description)
            .with_status(status)
            .with_priority(Priority::parse_optional(&priority)?)
            .with_project(project_id.map(EntityId::new))
            .with_due_date(parse_due_date(&due_date)?))
    }
}

/// Task form submitted to edit a task. Only the fields set are changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
    priority: Option<String>,
    project_id: Option<Option<u64>>,
    due_date: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates a request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the status literal.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Replaces the priority literal; the empty string clears it.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Moves the task to another project or team.
    #[must_use]
    pub const fn with_project(mut self, project_id: u64) -> Self {
        self.project_id = Some(Some(project_id));
        self
    }

    /// Detaches the task from its project or team.
    #[must_use]
    pub const fn without_project(mut self) -> Self {
        self.project_id = Some(None);
        self
    }

    /// Replaces the due date literal; the empty string clears it.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub(super) fn into_patch(self) -> Result<TaskPatch, TaskLifecycleError> {
        let mut patch = TaskPatch::new();
        if let Some(title) = self.title {
            patch = patch.with_title(TaskTitle::new(title)?);
        }
        if let Some(description) = self.description {
            patch = patch.with_description(description);
        }
        if let Some(status) = self.status {
            patch = patch.with_status(TaskStatus::try_from(status.as_str())?);
        }
        if let Some(priority) = self.priority {
            patch = patch.with_priority(Priority::parse_optional(&priority)?);
        }
        if let Some(project_id) = self.project_id {
            patch = patch.with_project(project_id.map(EntityId::new));
        }
        if let Some(due_date) = self.due_date {
            patch = patch.with_due_date(parse_due_date(&due_date)?);
        }
        Ok(patch)
    }
}

/// Status change requested by dropping a card on a board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTaskRequest {
    task_id: EntityId,
    status: TaskStatus,
}

impl MoveTaskRequest {
    /// Creates a request from already-typed values.
    #[must_use]
    pub const fn new(task_id: EntityId, status: TaskStatus) -> Self {
        Self { task_id, status }
    }

    /// Parses the drag payload (the task id in decimal form) and the target
    /// column's status literal.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the payload is not a
    /// decimal id, or [`TaskLifecycleError::InvalidStatus`] when the target
    /// is not a known status.
    pub fn parse(payload: &str, target_status: &str) -> Result<Self, TaskLifecycleError> {
        let task_id = payload
            .parse::<EntityId>()
            .map_err(|_| TaskDomainError::InvalidTaskId(payload.to_owned()))?;
        let status = TaskStatus::try_from(target_status)?;
        Ok(Self { task_id, status })
    }

    /// Returns the task being moved.
    #[must_use]
    pub const fn task_id(&self) -> EntityId {
        self.task_id
    }

    /// Returns the target status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }
}
