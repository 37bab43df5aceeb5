//! Service layer for project and team management.
//!
//! Provides [`GroupService`], which validates group forms, delegates
//! storage to a group repository and joins each group with completion
//! statistics computed from the live task collection.

use crate::board::{query::SearchQuery, stats::CompletionStats};
use crate::group::domain::{
    Group, GroupColor, GroupDomainError, GroupDraft, GroupName, GroupPatch,
};
use crate::store::{
    domain::EntityId,
    ports::{EntityRepository, RepositoryError},
};
use crate::task::domain::Task;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Group form submitted to create a project or team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateGroupRequest {
    name: String,
    color: Option<String>,
}

impl CreateGroupRequest {
    /// Creates a request with the default color.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
        }
    }

    /// Sets the color literal.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    fn into_draft(self) -> Result<GroupDraft, GroupDomainError> {
        let color = self
            .color
            .as_deref()
            .map(GroupColor::try_from)
            .transpose()?
            .unwrap_or_default();
        Ok(GroupDraft::new(GroupName::new(self.name)?, color))
    }
}

/// Group form submitted to edit a project or team.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateGroupRequest {
    name: Option<String>,
    color: Option<String>,
}

impl UpdateGroupRequest {
    /// Creates a request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the color literal.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    fn into_patch(self) -> Result<GroupPatch, GroupDomainError> {
        let mut patch = GroupPatch::new();
        if let Some(name) = self.name {
            patch = patch.with_name(GroupName::new(name)?);
        }
        if let Some(color) = self.color {
            patch = patch.with_color(GroupColor::try_from(color.as_str())?);
        }
        Ok(patch)
    }
}

/// A group together with statistics over its live tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupOverview {
    /// The project or team.
    pub group: Group,
    /// Completion statistics for its tasks.
    pub stats: CompletionStats,
}

/// Service-level errors for group operations.
#[derive(Debug, Error)]
pub enum GroupServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] GroupDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for group service operations.
pub type GroupServiceResult<T> = Result<T, GroupServiceError>;

/// Project or team orchestration service.
#[derive(Clone)]
pub struct GroupService<G, T>
where
    G: EntityRepository<Group>,
    T: EntityRepository<Task>,
{
    groups: Arc<G>,
    tasks: Arc<T>,
}

impl<G, T> GroupService<G, T>
where
    G: EntityRepository<Group>,
    T: EntityRepository<Task>,
{
    /// Creates a new group service.
    #[must_use]
    pub const fn new(groups: Arc<G>, tasks: Arc<T>) -> Self {
        Self { groups, tasks }
    }

    /// Returns the underlying group repository.
    #[must_use]
    pub const fn repository(&self) -> &Arc<G> {
        &self.groups
    }

    /// Creates a project or team from a submitted form.
    ///
    /// # Errors
    ///
    /// Returns [`GroupServiceError`] when the form is invalid or the
    /// repository rejects the write.
    pub async fn create_group(&self, request: CreateGroupRequest) -> GroupServiceResult<Group> {
        let draft = request.into_draft()?;
        let group = self.groups.create(draft).await?;
        info!(kind = %self.groups.kind(), id = %group.id(), "group created");
        Ok(group)
    }

    /// Applies an edit form to an existing group.
    ///
    /// # Errors
    ///
    /// Returns [`GroupServiceError`] when the form is invalid or the group
    /// does not exist.
    pub async fn update_group(
        &self,
        id: EntityId,
        request: UpdateGroupRequest,
    ) -> GroupServiceResult<Group> {
        let patch = request.into_patch()?;
        let group = self.groups.update(id, patch).await?;
        info!(kind = %self.groups.kind(), %id, "group updated");
        Ok(group)
    }

    /// Deletes a group.
    ///
    /// # Errors
    ///
    /// Returns [`GroupServiceError::Repository`] when the group does not
    /// exist or tasks still reference it.
    pub async fn delete_group(&self, id: EntityId) -> GroupServiceResult<()> {
        self.groups.delete(id).await?;
        info!(kind = %self.groups.kind(), %id, "group deleted");
        Ok(())
    }

    /// Retrieves a group by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GroupServiceError::Repository`] when the group does not
    /// exist.
    pub async fn get_group(&self, id: EntityId) -> GroupServiceResult<Group> {
        Ok(self.groups.get_by_id(id).await?)
    }

    /// Returns every group in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`GroupServiceError::Repository`] when the store cannot be
    /// read.
    pub async fn list_groups(&self) -> GroupServiceResult<Vec<Group>> {
        Ok(self.groups.get_all().await?)
    }

    /// Computes completion statistics for one group from the live tasks.
    ///
    /// # Errors
    ///
    /// Returns [`GroupServiceError::Repository`] when the task store cannot
    /// be read.
    pub async fn stats(&self, id: EntityId) -> GroupServiceResult<CompletionStats> {
        let tasks = self.tasks.get_all().await?;
        Ok(CompletionStats::for_group(&tasks, id))
    }

    /// Lists the groups matching a search query with their statistics.
    ///
    /// # Errors
    ///
    /// Returns [`GroupServiceError::Repository`] when either store cannot be
    /// read.
    pub async fn overview(&self, query: &SearchQuery) -> GroupServiceResult<Vec<GroupOverview>> {
        let groups = self.groups.get_all().await?;
        let tasks = self.tasks.get_all().await?;
        Ok(groups
            .into_iter()
            .filter(|group| query.matches_group(group))
            .map(|group| {
                let stats = CompletionStats::for_group(&tasks, group.id());
                GroupOverview { group, stats }
            })
            .collect())
    }
}
