//! Composition root wiring the in-memory stores to their services.
//!
//! A [`Workspace`] owns one task collection and two group collections
//! (projects and teams). Both group collections are guarded against the
//! shared task collection, so a group cannot be deleted while a task still
//! references it. Construct one per process and pass it by reference.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::board::{
    columns::BoardColumns,
    query::{SearchQuery, TaskSort, filter_tasks, list_view},
};
use crate::config::WorkspaceConfig;
use crate::group::{
    adapters::{external::ExternalGroupRecord, guarded::GuardedGroupRepository},
    domain::{Group, GroupDomainError},
    services::GroupService,
};
use crate::store::{
    adapters::memory::InMemoryRepository,
    domain::{Entity, EntityKind},
    ports::{EntityRepository, RepositoryResult},
};
use crate::task::{
    adapters::external::{ExternalTaskRecord, TaskRecordError},
    domain::Task,
    services::TaskLifecycleService,
};

/// Task collection backing a workspace.
pub type TaskStore = InMemoryRepository<Task, DefaultClock>;

/// Guarded project or team collection backing a workspace.
pub type GroupStore = GuardedGroupRepository<InMemoryRepository<Group, DefaultClock>, TaskStore>;

/// Errors raised while loading seed collections.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A seed document is not a JSON array of records.
    #[error("malformed {kind} seed data: {source}")]
    Json {
        /// Collection the document was meant for.
        kind: EntityKind,
        /// Underlying parser error.
        #[source]
        source: serde_json::Error,
    },
    /// A task record failed validation.
    #[error("invalid task seed {id}: {source}")]
    Task {
        /// Record identifier.
        id: u64,
        /// Validation failure.
        #[source]
        source: TaskRecordError,
    },
    /// A project or team record failed validation.
    #[error("invalid {kind} seed {id}: {source}")]
    Group {
        /// Collection the record was meant for.
        kind: EntityKind,
        /// Record identifier.
        id: u64,
        /// Validation failure.
        #[source]
        source: GroupDomainError,
    },
}

/// Raw seed collections in their external record shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedData {
    /// Task records.
    pub tasks: Vec<ExternalTaskRecord>,
    /// Project records.
    pub projects: Vec<ExternalGroupRecord>,
    /// Team records.
    pub teams: Vec<ExternalGroupRecord>,
}

impl SeedData {
    /// Parses three JSON arrays, one per collection.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Json`] naming the first collection that does not
    /// parse.
    pub fn from_json_strs(tasks: &str, projects: &str, teams: &str) -> Result<Self, SeedError> {
        Ok(Self {
            tasks: parse_collection(EntityKind::Task, tasks)?,
            projects: parse_collection(EntityKind::Project, projects)?,
            teams: parse_collection(EntityKind::Team, teams)?,
        })
    }
}

fn parse_collection<T: DeserializeOwned>(
    kind: EntityKind,
    text: &str,
) -> Result<Vec<T>, SeedError> {
    serde_json::from_str(text).map_err(|source| SeedError::Json { kind, source })
}

/// The task, project and team stores with their services.
pub struct Workspace {
    tasks: TaskLifecycleService<TaskStore>,
    projects: GroupService<GroupStore, TaskStore>,
    teams: GroupService<GroupStore, TaskStore>,
}

impl Workspace {
    /// Creates an empty workspace.
    #[must_use]
    pub fn new(config: &WorkspaceConfig) -> Self {
        let clock = Arc::new(DefaultClock);
        Self::assemble(
            store(EntityKind::Task, &clock, config),
            store(EntityKind::Project, &clock, config),
            store(EntityKind::Team, &clock, config),
        )
    }

    /// Creates a workspace pre-populated from seed records.
    ///
    /// Records without a creation timestamp are stamped with the load time.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] for the first record that fails validation.
    pub fn with_seed(config: &WorkspaceConfig, seed: SeedData) -> Result<Self, SeedError> {
        let clock = Arc::new(DefaultClock);
        let imported_at = clock.utc();

        let tasks = seed
            .tasks
            .into_iter()
            .map(|record| {
                let id = record.id;
                record
                    .into_task(imported_at)
                    .map_err(|source| SeedError::Task { id, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let projects = seed_groups(EntityKind::Project, seed.projects, imported_at)?;
        let teams = seed_groups(EntityKind::Team, seed.teams, imported_at)?;
        info!(
            tasks = tasks.len(),
            projects = projects.len(),
            teams = teams.len(),
            "loaded seed data"
        );

        Ok(Self::assemble(
            store(EntityKind::Task, &clock, config).with_entities(tasks),
            store(EntityKind::Project, &clock, config).with_entities(projects),
            store(EntityKind::Team, &clock, config).with_entities(teams),
        ))
    }

    fn assemble(
        task_store: TaskStore,
        project_store: InMemoryRepository<Group, DefaultClock>,
        team_store: InMemoryRepository<Group, DefaultClock>,
    ) -> Self {
        let tasks = Arc::new(task_store);
        let guard = |groups: InMemoryRepository<Group, DefaultClock>| {
            Arc::new(GuardedGroupRepository::new(
                Arc::new(groups),
                Arc::clone(&tasks),
            ))
        };
        let projects = GroupService::new(guard(project_store), Arc::clone(&tasks));
        let teams = GroupService::new(guard(team_store), Arc::clone(&tasks));
        Self {
            tasks: TaskLifecycleService::new(tasks),
            projects,
            teams,
        }
    }

    /// Returns the task lifecycle service.
    #[must_use]
    pub const fn tasks(&self) -> &TaskLifecycleService<TaskStore> {
        &self.tasks
    }

    /// Returns the project service.
    #[must_use]
    pub const fn projects(&self) -> &GroupService<GroupStore, TaskStore> {
        &self.projects
    }

    /// Returns the team service.
    #[must_use]
    pub const fn teams(&self) -> &GroupService<GroupStore, TaskStore> {
        &self.teams
    }

    /// Builds the kanban board for the tasks matching `query`.
    ///
    /// Tasks are matched against their title, description and project
    /// name.
    ///
    /// # Errors
    ///
    /// Returns a repository error when a collection cannot be read.
    pub async fn board(&self, query: &SearchQuery) -> RepositoryResult<BoardColumns> {
        let (tasks, projects) = self.snapshot().await?;
        Ok(BoardColumns::from_tasks(filter_tasks(tasks, &projects, query)))
    }

    /// Builds the sorted task list for the tasks matching `query`.
    ///
    /// # Errors
    ///
    /// Returns a repository error when a collection cannot be read.
    pub async fn task_list(
        &self,
        query: &SearchQuery,
        sort: TaskSort,
    ) -> RepositoryResult<Vec<Task>> {
        let (tasks, projects) = self.snapshot().await?;
        Ok(list_view(tasks, &projects, query, sort))
    }

    async fn snapshot(&self) -> RepositoryResult<(Vec<Task>, Vec<Group>)> {
        let tasks = self.tasks.repository().get_all().await?;
        let projects = self.projects.repository().get_all().await?;
        Ok((tasks, projects))
    }
}

fn store<E: Entity>(
    kind: EntityKind,
    clock: &Arc<DefaultClock>,
    config: &WorkspaceConfig,
) -> InMemoryRepository<E, DefaultClock> {
    InMemoryRepository::new(kind, Arc::clone(clock)).with_latency(config.latency)
}

fn seed_groups(
    kind: EntityKind,
    records: Vec<ExternalGroupRecord>,
    imported_at: DateTime<Utc>,
) -> Result<Vec<Group>, SeedError> {
    records
        .into_iter()
        .map(|record| {
            let id = record.id;
            record
                .into_group(imported_at)
                .map_err(|source| SeedError::Group { kind, id, source })
        })
        .collect()
}
