//! Shared world state for task lifecycle BDD scenarios.

use rstest::fixture;
use taskboard::config::WorkspaceConfig;
use taskboard::task::{domain::Task, services::TaskLifecycleError};
use taskboard::workspace::Workspace;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskLifecycleWorld {
    /// The workspace under test.
    pub workspace: Workspace,
    /// Task created by the scenario.
    pub task: Option<Task>,
    /// Result of the last drag move.
    pub last_move: Option<Result<Task, TaskLifecycleError>>,
}

impl TaskLifecycleWorld {
    /// Creates a world around an empty workspace.
    #[must_use]
    pub fn new() -> Self {
        Self {
            workspace: Workspace::new(&WorkspaceConfig::default()),
            task: None,
            last_move: None,
        }
    }

    /// Returns the task created by the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error if no task has been created yet.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))
    }
}

impl Default for TaskLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskLifecycleWorld {
    TaskLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
