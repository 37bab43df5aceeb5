//! Referential integrity guard for project and team deletion.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::group::domain::{Group, GroupDraft, GroupPatch};
use crate::store::{
    domain::{EntityId, EntityKind},
    ports::{EntityRepository, RepositoryError, RepositoryResult},
};
use crate::task::domain::Task;

/// Group repository that refuses to delete a group still referenced by a
/// task.
///
/// The check reads the live task collection on every delete; it never
/// trusts the group's stored `task_count`. Every other operation is passed
/// straight to the wrapped repository.
///
/// The existence check, the dependent count and the inner delete are three
/// separate repository calls with no lock held across them. A task that
/// starts referencing the group between the count and the delete is not
/// seen, so the guard holds only when a single writer drives the workspace.
pub struct GuardedGroupRepository<G, T>
where
    G: EntityRepository<Group>,
    T: EntityRepository<Task>,
{
    groups: Arc<G>,
    tasks: Arc<T>,
}

impl<G, T> GuardedGroupRepository<G, T>
where
    G: EntityRepository<Group>,
    T: EntityRepository<Task>,
{
    /// Wraps a group repository with a guard over the given tasks.
    #[must_use]
    pub const fn new(groups: Arc<G>, tasks: Arc<T>) -> Self {
        Self { groups, tasks }
    }

    /// Counts the tasks currently filed under the group.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] when the task store cannot
    /// be read.
    pub async fn dependents(&self, id: EntityId) -> RepositoryResult<usize> {
        let tasks = self.tasks.get_all().await?;
        Ok(tasks.iter().filter(|task| task.belongs_to(id)).count())
    }
}

#[async_trait]
impl<G, T> EntityRepository<Group> for GuardedGroupRepository<G, T>
where
    G: EntityRepository<Group>,
    T: EntityRepository<Task>,
{
    fn kind(&self) -> EntityKind {
        self.groups.kind()
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Group>> {
        self.groups.get_all().await
    }

    async fn get_by_id(&self, id: EntityId) -> RepositoryResult<Group> {
        self.groups.get_by_id(id).await
    }

    async fn create(&self, draft: GroupDraft) -> RepositoryResult<Group> {
        self.groups.create(draft).await
    }

    async fn update(&self, id: EntityId, patch: GroupPatch) -> RepositoryResult<Group> {
        self.groups.update(id, patch).await
    }

    async fn delete(&self, id: EntityId) -> RepositoryResult<()> {
        self.groups.get_by_id(id).await?;

        let dependents = self.dependents(id).await?;
        if dependents > 0 {
            let kind = self.kind();
            warn!(%kind, %id, dependents, "refused to delete referenced group");
            return Err(RepositoryError::ReferentialConflict {
                kind,
                id,
                dependents,
            });
        }

        self.groups.delete(id).await
    }
}
