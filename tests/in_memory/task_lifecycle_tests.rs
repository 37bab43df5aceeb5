//! In-memory integration tests for the task lifecycle.

use super::helpers::workspace;
use eyre::ensure;
use rstest::rstest;
use taskboard::store::domain::EntityId;
use taskboard::store::ports::RepositoryError;
use taskboard::task::domain::TaskStatus;
use taskboard::task::services::{
    CreateTaskRequest, MoveTaskRequest, TaskLifecycleError, UpdateTaskRequest,
};
use taskboard::workspace::Workspace;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completion_follows_status_round_trip(workspace: Workspace) -> eyre::Result<()> {
    let service = workspace.tasks();
    let created = service
        .create_task(CreateTaskRequest::new("Write spec"))
        .await?;
    ensure!(created.id() == EntityId::new(1), "first task gets id 1");
    ensure!(created.status() == TaskStatus::Todo, "status defaults to todo");
    ensure!(created.completed_at().is_none(), "new todo task is not complete");

    let done = service
        .update_task(created.id(), UpdateTaskRequest::new().with_status("done"))
        .await?;
    ensure!(done.completed_at().is_some(), "done task carries a timestamp");

    let reopened = service
        .update_task(created.id(), UpdateTaskRequest::new().with_status("todo"))
        .await?;
    ensure!(reopened.completed_at().is_none(), "reopened task loses its timestamp");
    ensure!(reopened.created_at() == created.created_at(), "created_at is immutable");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ids_increase_without_gaps_and_reuse_the_tail(workspace: Workspace) -> eyre::Result<()> {
    let service = workspace.tasks();
    let mut ids = Vec::new();
    for title in ["one", "two", "three"] {
        ids.push(service.create_task(CreateTaskRequest::new(title)).await?.id().value());
    }
    ensure!(ids == vec![1, 2, 3], "ids should be 1, 2, 3, got {ids:?}");

    service.delete_task(EntityId::new(3)).await?;
    let next = service.create_task(CreateTaskRequest::new("four")).await?;
    ensure!(next.id() == EntityId::new(3), "deleting the max id frees it");

    for id in 1..=3 {
        service.delete_task(EntityId::new(id)).await?;
    }
    let fresh = service.create_task(CreateTaskRequest::new("five")).await?;
    ensure!(fresh.id() == EntityId::FIRST, "empty collection restarts at 1");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn drag_move_updates_status_only(workspace: Workspace) -> eyre::Result<()> {
    let service = workspace.tasks();
    let created = service
        .create_task(
            CreateTaskRequest::new("Card")
                .with_description("keep me")
                .with_priority("medium"),
        )
        .await?;

    let moved = service
        .move_task(MoveTaskRequest::parse(" 1 ", "done")?)
        .await?;
    ensure!(moved.status() == TaskStatus::Done, "status should be done");
    ensure!(moved.completed_at().is_some(), "moved card is complete");
    ensure!(moved.description() == created.description(), "description kept");
    ensure!(moved.priority() == created.priority(), "priority kept");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_task_reports_not_found(workspace: Workspace) -> eyre::Result<()> {
    let result = workspace
        .tasks()
        .update_task(EntityId::new(42), UpdateTaskRequest::new().with_status("done"))
        .await;
    ensure!(
        matches!(
            result,
            Err(TaskLifecycleError::Repository(RepositoryError::NotFound { .. }))
        ),
        "expected not found, got {result:?}"
    );
    ensure!(workspace.tasks().list_tasks().await?.is_empty(), "nothing created");
    Ok(())
}
