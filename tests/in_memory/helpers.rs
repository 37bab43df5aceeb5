//! Shared test helpers for in-memory workspace integration tests.

use rstest::fixture;
use taskboard::config::WorkspaceConfig;
use taskboard::workspace::{SeedData, Workspace};

/// Task seed mixing the backend's capitalized and lowercase field names.
pub const TASKS_JSON: &str = r#"[
  {"Id": 1, "title": "Draft roadmap", "description": "Quarterly ABCxyz goals",
   "status": "todo", "priority": "high", "projectId": 1,
   "dueDate": "2024-03-01", "createdAt": "2024-01-01T09:00:00Z"},
  {"id": 2, "Title": "Ship login", "status": "in-progress", "priority": "",
   "projectId": 2, "createdAt": "2024-01-02T09:00:00Z"},
  {"id": 3, "title": "Fix typo", "status": "done", "priority": "low",
   "projectId": 1, "dueDate": "2024-01-01", "createdAt": "2024-01-03T09:00:00Z"},
  {"id": 4, "title": "Team offsite", "status": "todo", "projectId": 1,
   "createdAt": "2024-01-04T09:00:00Z", "completedAt": "2024-01-05T09:00:00Z"}
]"#;

/// Project seed.
pub const PROJECTS_JSON: &str = r#"[
  {"Id": 1, "Name": "Website", "color": "green", "taskCount": 9,
   "createdAt": "2023-12-01T00:00:00Z"},
  {"id": 2, "name": "Mobile App", "color": "purple"}
]"#;

/// Team seed.
pub const TEAMS_JSON: &str = r#"[
  {"id": 1, "name": "Platform", "color": "teal"}
]"#;

/// Provides an empty workspace without simulated latency.
#[fixture]
pub fn workspace() -> Workspace {
    Workspace::new(&WorkspaceConfig::default())
}

/// Provides a workspace loaded from the seed constants.
///
/// # Panics
///
/// Panics if the seed constants no longer parse.
#[fixture]
pub fn seeded() -> Workspace {
    let seed = SeedData::from_json_strs(TASKS_JSON, PROJECTS_JSON, TEAMS_JSON)
        .expect("seed constants should parse");
    Workspace::with_seed(&WorkspaceConfig::default(), seed).expect("seed constants are valid")
}
