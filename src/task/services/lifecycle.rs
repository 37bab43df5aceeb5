//! Service layer wrapping the task repository with lifecycle rules.

use super::{CreateTaskRequest, MoveTaskRequest, UpdateTaskRequest};
use crate::store::{
    domain::EntityId,
    ports::{EntityRepository, RepositoryError},
};
use crate::task::domain::{
    ParsePriorityError, ParseTaskStatusError, Task, TaskDomainError, TaskPatch, TaskStatus,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The status literal is not a known status.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
    /// The priority literal is not a known priority.
    #[error(transparent)]
    InvalidPriority(#[from] ParsePriorityError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl TaskLifecycleError {
    /// Returns whether the error stems from rejected input rather than
    /// from the state of the store.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Domain(_) | Self::InvalidStatus(_) | Self::InvalidPriority(_)
        )
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Inputs are validated before the repository is called, so a rejected
/// request never leaves a partial change behind.
#[derive(Clone)]
pub struct TaskLifecycleService<R>
where
    R: EntityRepository<Task>,
{
    repository: Arc<R>,
}

impl<R> TaskLifecycleService<R>
where
    R: EntityRepository<Task>,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Creates a task from a submitted form.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when the form is invalid or the
    /// repository rejects the write.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let draft = request.into_draft()?;
        let task = self.repository.create(draft).await?;
        info!(task_id = %task.id(), status = %task.status(), "task created");
        Ok(task)
    }

    /// Applies an edit form to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when the form is invalid or the task
    /// does not exist.
    pub async fn update_task(
        &self,
        id: EntityId,
        request: UpdateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let patch = request.into_patch()?;
        let task = self.repository.update(id, patch).await?;
        info!(task_id = %id, status = %task.status(), "task updated");
        Ok(task)
    }

    /// Moves a task to another board column.
    ///
    /// Any column is reachable from any other; only the status changes.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the task does not
    /// exist.
    pub async fn move_task(&self, request: MoveTaskRequest) -> TaskLifecycleResult<Task> {
        let task = self
            .repository
            .update(request.task_id(), TaskPatch::status_only(request.status()))
            .await?;
        info!(task_id = %task.id(), status = %task.status(), "task moved");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the task does not
    /// exist.
    pub async fn delete_task(&self, id: EntityId) -> TaskLifecycleResult<()> {
        self.repository.delete(id).await?;
        info!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the task does not
    /// exist.
    pub async fn get_task(&self, id: EntityId) -> TaskLifecycleResult<Task> {
        Ok(self.repository.get_by_id(id).await?)
    }

    /// Returns every task in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the store cannot be
    /// read.
    pub async fn list_tasks(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.get_all().await?)
    }

    /// Returns the tasks assigned to a project or team.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the store cannot be
    /// read.
    pub async fn tasks_for_group(&self, group_id: EntityId) -> TaskLifecycleResult<Vec<Task>> {
        let tasks = self.list_tasks().await?;
        let matching: Vec<Task> = tasks
            .into_iter()
            .filter(|task| task.belongs_to(group_id))
            .collect();
        debug!(%group_id, count = matching.len(), "listed tasks for group");
        Ok(matching)
    }

    /// Returns the tasks currently in the given status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the store cannot be
    /// read.
    pub async fn tasks_with_status(&self, status: TaskStatus) -> TaskLifecycleResult<Vec<Task>> {
        let tasks = self.list_tasks().await?;
        Ok(tasks
            .into_iter()
            .filter(|task| task.status() == status)
            .collect())
    }
}
