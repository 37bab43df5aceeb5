//! Repository port providing identity-stable CRUD for one entity kind.

use crate::store::domain::{Entity, EntityId, EntityKind};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Storage contract shared by the task, project and team collections.
///
/// Every value returned is an owned copy: callers cannot reach internal
/// state through a result.
#[async_trait]
pub trait EntityRepository<E: Entity>: Send + Sync {
    /// Returns the collection name this repository serves.
    fn kind(&self) -> EntityKind;

    /// Returns a snapshot of every entity in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] when the store cannot be read.
    async fn get_all(&self) -> RepositoryResult<Vec<E>>;

    /// Returns the entity with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when no entity has that id.
    async fn get_by_id(&self, id: EntityId) -> RepositoryResult<E>;

    /// Stores a new entity under a freshly allocated identifier.
    ///
    /// The identifier is one above the largest identifier currently held,
    /// or [`EntityId::FIRST`] for an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::IdsExhausted`] when no identifier is left
    /// to allocate, or [`RepositoryError::Unavailable`] when the store
    /// cannot be written.
    async fn create(&self, draft: E::Draft) -> RepositoryResult<E>;

    /// Merges a partial update over an existing entity.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when no entity has that id.
    async fn update(&self, id: EntityId, patch: E::Patch) -> RepositoryResult<E>;

    /// Removes an entity.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when no entity has that id, or
    /// [`RepositoryError::ReferentialConflict`] when other records still
    /// reference it.
    async fn delete(&self, id: EntityId) -> RepositoryResult<()>;
}

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// The operation targeted an identifier that does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Collection that was searched.
        kind: EntityKind,
        /// Identifier that was requested.
        id: EntityId,
    },

    /// Deletion was refused because tasks still reference the entity.
    #[error("cannot delete {kind} {id}: {dependents} task(s) still reference it")]
    ReferentialConflict {
        /// Collection holding the referenced entity.
        kind: EntityKind,
        /// Identifier of the referenced entity.
        id: EntityId,
        /// Number of tasks blocking the deletion.
        dependents: usize,
    },

    /// No identifier is left to allocate, or the allocated one is taken.
    #[error("cannot allocate a new {kind} identifier after {last}")]
    IdsExhausted {
        /// Collection that ran out of identifiers.
        kind: EntityKind,
        /// Largest identifier currently held.
        last: EntityId,
    },

    /// The backing store could not serve the request.
    #[error("store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Builds a [`RepositoryError::NotFound`] value.
    #[must_use]
    pub const fn not_found(kind: EntityKind, id: EntityId) -> Self {
        Self::NotFound { kind, id }
    }

    /// Wraps a backing-store failure.
    #[must_use]
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
