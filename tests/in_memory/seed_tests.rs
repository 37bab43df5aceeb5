//! In-memory integration tests for seed loading.

use super::helpers::{PROJECTS_JSON, TASKS_JSON, TEAMS_JSON, seeded};
use eyre::ensure;
use rstest::rstest;
use taskboard::config::WorkspaceConfig;
use taskboard::group::domain::GroupColor;
use taskboard::store::domain::{EntityId, EntityKind};
use taskboard::store::ports::RepositoryError;
use taskboard::task::domain::{Priority, TaskStatus};
use taskboard::task::services::{CreateTaskRequest, TaskLifecycleError};
use taskboard::workspace::{SeedData, SeedError, Workspace};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mixed_field_names_resolve(seeded: Workspace) -> eyre::Result<()> {
    let first = seeded.tasks().get_task(EntityId::new(1)).await?;
    ensure!(first.title().as_str() == "Draft roadmap", "title read from lowercase key");
    ensure!(first.priority() == Some(Priority::High), "priority parsed");

    let second = seeded.tasks().get_task(EntityId::new(2)).await?;
    ensure!(second.title().as_str() == "Ship login", "title read from capitalized key");
    ensure!(second.priority().is_none(), "empty priority means none");
    ensure!(second.status() == TaskStatus::InProgress, "status parsed");

    let website = seeded.projects().get_group(EntityId::new(1)).await?;
    ensure!(website.name().as_str() == "Website", "name read from capitalized key");
    ensure!(website.color() == GroupColor::Green, "color parsed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeded_completion_is_reconciled(seeded: Workspace) -> eyre::Result<()> {
    let done = seeded.tasks().get_task(EntityId::new(3)).await?;
    ensure!(
        done.completed_at() == Some(done.created_at()),
        "done seed without timestamp completes at creation"
    );
    let todo = seeded.tasks().get_task(EntityId::new(4)).await?;
    ensure!(todo.completed_at().is_none(), "todo seed drops its timestamp");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn allocation_continues_after_seeded_ids(seeded: Workspace) -> eyre::Result<()> {
    let created = seeded.tasks().create_task(CreateTaskRequest::new("Next")).await?;
    ensure!(created.id() == EntityId::new(5), "next id follows the largest seed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seed_at_largest_id_is_never_overwritten() -> eyre::Result<()> {
    let seed = SeedData::from_json_strs(
        r#"[{"id": 18446744073709551615, "title": "Seeded max"}]"#,
        "[]",
        "[]",
    )?;
    let workspace = Workspace::with_seed(&WorkspaceConfig::default(), seed)?;

    let result = workspace.tasks().create_task(CreateTaskRequest::new("New")).await;
    ensure!(
        matches!(
            result,
            Err(TaskLifecycleError::Repository(RepositoryError::IdsExhausted {
                kind: EntityKind::Task,
                ..
            }))
        ),
        "expected exhausted ids, got {result:?}"
    );
    let tasks = workspace.tasks().list_tasks().await?;
    ensure!(tasks.len() == 1, "collection size changed");
    ensure!(
        tasks.first().map(|task| task.title().as_str()) == Some("Seeded max"),
        "seeded task was overwritten"
    );
    Ok(())
}

#[rstest]
fn malformed_json_names_the_collection() {
    let result = SeedData::from_json_strs(TASKS_JSON, "{not json", TEAMS_JSON);
    assert!(matches!(
        result,
        Err(SeedError::Json {
            kind: EntityKind::Project,
            ..
        })
    ));
}

#[rstest]
fn invalid_record_is_reported_with_its_id() {
    let seed = SeedData::from_json_strs(
        r#"[{"id": 8, "title": "Bad", "status": "blocked"}]"#,
        PROJECTS_JSON,
        TEAMS_JSON,
    )
    .expect("well-formed JSON");
    let result = Workspace::with_seed(&WorkspaceConfig::default(), seed);
    assert!(matches!(result, Err(SeedError::Task { id: 8, .. })));
}
