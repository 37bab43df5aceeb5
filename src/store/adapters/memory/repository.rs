//! Id-keyed in-memory repository with simulated remote latency.

use async_trait::async_trait;
use mockable::Clock;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use crate::config::{LatencyConfig, StoreOperation};
use crate::store::{
    domain::{Entity, EntityId, EntityKind},
    ports::{EntityRepository, RepositoryError, RepositoryResult},
};

type Collection<E> = BTreeMap<EntityId, E>;

/// Thread-safe in-memory repository for one entity kind.
///
/// Entities are keyed by identifier, so iteration follows allocation order
/// and lookups never depend on positional indexes. Each operation waits for
/// its configured latency before touching the collection and then applies
/// the whole change under one lock, which serializes mutations and makes
/// concurrent writes to the same id last-write-wins.
pub struct InMemoryRepository<E, C>
where
    E: Entity,
    C: Clock + Send + Sync,
{
    kind: EntityKind,
    state: Arc<RwLock<Collection<E>>>,
    clock: Arc<C>,
    latency: LatencyConfig,
}

impl<E, C> InMemoryRepository<E, C>
where
    E: Entity,
    C: Clock + Send + Sync,
{
    /// Creates an empty repository without simulated latency.
    #[must_use]
    pub fn new(kind: EntityKind, clock: Arc<C>) -> Self {
        Self {
            kind,
            state: Arc::new(RwLock::new(Collection::new())),
            clock,
            latency: LatencyConfig::none(),
        }
    }

    /// Sets the simulated latency applied to each operation.
    #[must_use]
    pub const fn with_latency(mut self, latency: LatencyConfig) -> Self {
        self.latency = latency;
        self
    }

    /// Pre-populates the collection with already-identified entities.
    ///
    /// A later entity with the same identifier replaces an earlier one.
    #[must_use]
    pub fn with_entities(self, entities: impl IntoIterator<Item = E>) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.extend(entities.into_iter().map(|entity| (entity.id(), entity)));
        }
        self
    }

    async fn simulate(&self, operation: StoreOperation) {
        let delay = self.latency.delay(operation);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Collection<E>>> {
        self.state
            .read()
            .map_err(|err| RepositoryError::unavailable(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, Collection<E>>> {
        self.state
            .write()
            .map_err(|err| RepositoryError::unavailable(std::io::Error::other(err.to_string())))
    }
}

/// Returns the identifier that follows the largest one still stored.
///
/// Fails with that largest identifier when no successor exists.
fn next_id<E>(collection: &Collection<E>) -> Result<EntityId, EntityId> {
    collection
        .last_key_value()
        .map_or(Ok(EntityId::FIRST), |(id, _)| id.next().ok_or(*id))
}

#[async_trait]
impl<E, C> EntityRepository<E> for InMemoryRepository<E, C>
where
    E: Entity,
    C: Clock + Send + Sync + 'static,
{
    fn kind(&self) -> EntityKind {
        self.kind
    }

    async fn get_all(&self) -> RepositoryResult<Vec<E>> {
        self.simulate(StoreOperation::GetAll).await;
        let state = self.read()?;
        Ok(state.values().cloned().collect())
    }

    async fn get_by_id(&self, id: EntityId) -> RepositoryResult<E> {
        self.simulate(StoreOperation::GetById).await;
        let state = self.read()?;
        state
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(self.kind, id))
    }

    async fn create(&self, draft: E::Draft) -> RepositoryResult<E> {
        self.simulate(StoreOperation::Create).await;
        let mut state = self.write()?;
        let exhausted = |last: EntityId| RepositoryError::IdsExhausted {
            kind: self.kind,
            last,
        };
        let id = next_id(&state).map_err(exhausted)?;
        let Entry::Vacant(slot) = state.entry(id) else {
            return Err(exhausted(id));
        };
        let entity = slot
            .insert(E::from_draft(id, draft, self.clock.utc()))
            .clone();
        debug!(kind = %self.kind, %id, "created entity");
        Ok(entity)
    }

    async fn update(&self, id: EntityId, patch: E::Patch) -> RepositoryResult<E> {
        self.simulate(StoreOperation::Update).await;
        let now = self.clock.utc();
        let mut state = self.write()?;
        let entity = state
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found(self.kind, id))?;
        entity.apply_patch(patch, now);
        debug!(kind = %self.kind, %id, "updated entity");
        Ok(entity.clone())
    }

    async fn delete(&self, id: EntityId) -> RepositoryResult<()> {
        self.simulate(StoreOperation::Delete).await;
        let mut state = self.write()?;
        state
            .remove(&id)
            .ok_or_else(|| RepositoryError::not_found(self.kind, id))?;
        debug!(kind = %self.kind, %id, "deleted entity");
        Ok(())
    }
}
