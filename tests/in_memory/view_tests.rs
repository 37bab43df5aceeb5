//! In-memory integration tests for the read-side views.

use super::helpers::seeded;
use eyre::ensure;
use rstest::rstest;
use taskboard::board::query::{SearchQuery, SortDirection, SortField, TaskSort};
use taskboard::store::domain::EntityId;
use taskboard::task::domain::{Task, TaskStatus};
use taskboard::task::services::{CreateTaskRequest, MoveTaskRequest};
use taskboard::workspace::Workspace;

fn ids(tasks: &[Task]) -> Vec<u64> {
    tasks.iter().map(|task| task.id().value()).collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_partitions_the_filtered_tasks(seeded: Workspace) -> eyre::Result<()> {
    let board = seeded.board(&SearchQuery::new("")).await?;
    ensure!(board.total() == 4, "all tasks on the board");
    ensure!(ids(board.column(TaskStatus::Todo)) == vec![1, 4], "todo column");
    ensure!(ids(board.column(TaskStatus::InProgress)) == vec![2], "in-progress column");
    ensure!(ids(board.column(TaskStatus::Done)) == vec![3], "done column");

    let filtered = seeded.board(&SearchQuery::new("abc")).await?;
    ensure!(filtered.total() == 1, "only the description match remains");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_matches_the_joined_project_name(seeded: Workspace) -> eyre::Result<()> {
    let list = seeded
        .task_list(&SearchQuery::new("MOBILE"), TaskSort::default())
        .await?;
    ensure!(ids(&list) == vec![2], "expected the mobile app task, got {:?}", ids(&list));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_sorts_missing_due_dates_first(seeded: Workspace) -> eyre::Result<()> {
    let sort = TaskSort::new(SortField::DueDate, SortDirection::Ascending);
    let list = seeded.task_list(&SearchQuery::new(""), sort).await?;
    ensure!(ids(&list) == vec![2, 4, 3, 1], "got {:?}", ids(&list));

    let newest_first = seeded
        .task_list(&SearchQuery::new(""), TaskSort::default())
        .await?;
    ensure!(ids(&newest_first) == vec![4, 3, 2, 1], "default sort is newest first");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overview_reflects_each_mutation(seeded: Workspace) -> eyre::Result<()> {
    let website = EntityId::new(1);
    let before = seeded.projects().stats(website).await?;
    ensure!(before.total == 3, "website has three tasks");
    ensure!(before.completion_rate == 33, "one of three done rounds to 33");

    seeded
        .tasks()
        .move_task(MoveTaskRequest::parse("1", "done")?)
        .await?;
    seeded
        .tasks()
        .create_task(CreateTaskRequest::new("Launch").with_project(1).with_status("done"))
        .await?;

    let overview = seeded.projects().overview(&SearchQuery::new("web")).await?;
    let Some(entry) = overview.first() else {
        eyre::bail!("website should match");
    };
    ensure!(overview.len() == 1, "only the website matches");
    ensure!(entry.stats.total == 4, "new task counted");
    ensure!(entry.stats.completed == 3, "three done");
    ensure!(entry.stats.completion_rate == 75, "three of four done");
    ensure!(entry.group.task_count() == 9, "stored counter is left alone");
    Ok(())
}
