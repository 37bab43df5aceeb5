//! Completion statistics per project or team.

use crate::store::domain::EntityId;
use crate::task::domain::{Task, TaskStatus};
use serde::Serialize;

/// Counts over the tasks filed under one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionStats {
    /// Number of tasks in the group.
    pub total: usize,
    /// Tasks whose status is `done`.
    pub completed: usize,
    /// Tasks whose status is `in-progress`.
    pub in_progress: usize,
    /// Percentage of completed tasks, rounded half up; zero when empty.
    pub completion_rate: u8,
}

impl CompletionStats {
    /// Computes statistics for the tasks referencing `group_id`.
    #[must_use]
    pub fn for_group(tasks: &[Task], group_id: EntityId) -> Self {
        Self::from_tasks(tasks.iter().filter(|task| task.belongs_to(group_id)))
    }

    /// Computes statistics over an arbitrary set of tasks.
    #[must_use]
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut stats = Self::default();
        for task in tasks {
            stats.total += 1;
            match task.status() {
                TaskStatus::Done => stats.completed += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Todo => {}
            }
        }
        stats.completion_rate = completion_rate(stats.completed, stats.total);
        stats
    }
}

/// Returns `completed / total` as a percentage rounded half up, or zero
/// when `total` is zero.
#[must_use]
pub fn completion_rate(completed: usize, total: usize) -> u8 {
    let doubled_total = total.saturating_mul(2);
    let rounded = completed
        .saturating_mul(200)
        .saturating_add(total)
        .checked_div(doubled_total)
        .unwrap_or(0);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}
