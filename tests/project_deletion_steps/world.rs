//! Shared world state for project deletion BDD scenarios.

use rstest::fixture;
use taskboard::config::WorkspaceConfig;
use taskboard::group::services::GroupServiceError;
use taskboard::task::domain::Task;
use taskboard::workspace::Workspace;

/// Scenario world for project deletion behaviour tests.
pub struct ProjectDeletionWorld {
    /// The workspace under test.
    pub workspace: Workspace,
    /// Task filed by the scenario.
    pub task: Option<Task>,
    /// Result of the last project deletion.
    pub last_delete: Option<Result<(), GroupServiceError>>,
}

impl ProjectDeletionWorld {
    /// Creates a world around an empty workspace.
    #[must_use]
    pub fn new() -> Self {
        Self {
            workspace: Workspace::new(&WorkspaceConfig::default()),
            task: None,
            last_delete: None,
        }
    }
}

impl Default for ProjectDeletionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProjectDeletionWorld {
    ProjectDeletionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
