//! Kanban column partitioning.

use crate::task::domain::{Task, TaskStatus};
use serde::Serialize;

/// Tasks split into the three board columns, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BoardColumns {
    /// Tasks not yet started.
    pub todo: Vec<Task>,
    /// Tasks underway.
    pub in_progress: Vec<Task>,
    /// Finished tasks.
    pub done: Vec<Task>,
}

impl BoardColumns {
    /// Partitions tasks by status.
    #[must_use]
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut columns = Self::default();
        for task in tasks {
            match task.status() {
                TaskStatus::Todo => columns.todo.push(task),
                TaskStatus::InProgress => columns.in_progress.push(task),
                TaskStatus::Done => columns.done.push(task),
            }
        }
        columns
    }

    /// Returns the column for a status.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    /// Returns the number of tasks across all columns.
    #[must_use]
    pub fn total(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }
}
