//! Free-text search and list-view sorting.

use crate::group::domain::Group;
use crate::store::domain::EntityId;
use crate::task::domain::{Priority, Task};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Case-insensitive substring query typed into the search bar.
///
/// The empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Creates a query from raw search text.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    /// Returns whether the query is empty and therefore matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Returns whether `text` contains the query, ignoring case.
    #[must_use]
    pub fn matches_text(&self, text: &str) -> bool {
        self.is_empty() || text.to_lowercase().contains(&self.needle)
    }

    /// Returns whether a task matches on its title, its description or the
    /// name of the group it is filed under.
    #[must_use]
    pub fn matches_task(&self, task: &Task, group_name: &str) -> bool {
        self.matches_text(task.title().as_str())
            || self.matches_text(task.description())
            || self.matches_text(group_name)
    }

    /// Returns whether a group matches on its name.
    #[must_use]
    pub fn matches_group(&self, group: &Group) -> bool {
        self.matches_text(group.name().as_str())
    }
}

/// Lookup from group id to group name for joining tasks with their group.
#[derive(Debug, Clone, Default)]
pub struct GroupNames<'a> {
    names: HashMap<EntityId, &'a str>,
}

impl<'a> GroupNames<'a> {
    /// Indexes the given groups by id.
    #[must_use]
    pub fn new(groups: &'a [Group]) -> Self {
        Self {
            names: groups
                .iter()
                .map(|group| (group.id(), group.name().as_str()))
                .collect(),
        }
    }

    /// Returns the group name, or the empty string when the task has no
    /// group or the group no longer exists.
    #[must_use]
    pub fn resolve(&self, id: Option<EntityId>) -> &'a str {
        id.and_then(|key| self.names.get(&key).copied())
            .unwrap_or_default()
    }
}

/// Returns the tasks matching `query`, in their original order.
#[must_use]
pub fn filter_tasks(tasks: Vec<Task>, groups: &[Group], query: &SearchQuery) -> Vec<Task> {
    if query.is_empty() {
        return tasks;
    }
    let names = GroupNames::new(groups);
    tasks
        .into_iter()
        .filter(|task| query.matches_task(task, names.resolve(task.project_id())))
        .collect()
}

/// Returns the groups whose name matches `query`, in their original order.
#[must_use]
pub fn filter_groups(groups: Vec<Group>, query: &SearchQuery) -> Vec<Group> {
    groups
        .into_iter()
        .filter(|group| query.matches_group(group))
        .collect()
}

/// Error returned for an unknown sort key or direction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort option: {0}")]
pub struct ParseSortError(pub String);

/// Column a task list can be sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Task identifier.
    Id,
    /// Title text.
    Title,
    /// Description text.
    Description,
    /// Status wire literal.
    Status,
    /// Priority wire literal, unset first.
    Priority,
    /// Name of the joined project or team.
    Project,
    /// Due date, absent treated as the epoch.
    DueDate,
    /// Creation time.
    #[default]
    CreatedAt,
    /// Completion time, absent treated as the epoch.
    CompletedAt,
}

impl SortField {
    /// Returns the list view's key for this field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Description => "description",
            Self::Status => "status",
            Self::Priority => "priority",
            Self::Project => "project",
            Self::DueDate => "dueDate",
            Self::CreatedAt => "createdAt",
            Self::CompletedAt => "completedAt",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for SortField {
    type Error = ParseSortError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "id" => Ok(Self::Id),
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "status" => Ok(Self::Status),
            "priority" => Ok(Self::Priority),
            "project" => Ok(Self::Project),
            "dueDate" => Ok(Self::DueDate),
            "createdAt" => Ok(Self::CreatedAt),
            "completedAt" => Ok(Self::CompletedAt),
            _ => Err(ParseSortError(value.to_owned())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest first.
    #[serde(rename = "asc")]
    Ascending,
    /// Largest first.
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction, as toggled by clicking the active
    /// column header.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl TryFrom<&str> for SortDirection {
    type Error = ParseSortError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            _ => Err(ParseSortError(value.to_owned())),
        }
    }
}

/// Sort order for the task list. Defaults to newest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskSort {
    /// Field compared.
    pub field: SortField,
    /// Direction of the comparison.
    pub direction: SortDirection,
}

impl TaskSort {
    /// Creates a sort order.
    #[must_use]
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Returns the order that follows a click on `field`'s header: the
    /// active field flips direction, a new field starts ascending.
    #[must_use]
    pub fn clicked(self, field: SortField) -> Self {
        if self.field == field {
            Self::new(field, self.direction.toggled())
        } else {
            Self::new(field, SortDirection::Ascending)
        }
    }

    /// Three-way comparison of two tasks under this order.
    #[must_use]
    pub fn compare(&self, a: &Task, b: &Task, names: &GroupNames<'_>) -> Ordering {
        let ordering = compare_field(self.field, a, b, names);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

fn epoch_date() -> NaiveDate {
    DateTime::<Utc>::UNIX_EPOCH.date_naive()
}

fn priority_literal(task: &Task) -> &'static str {
    task.priority().map_or("", Priority::as_str)
}

fn compare_field(field: SortField, a: &Task, b: &Task, names: &GroupNames<'_>) -> Ordering {
    match field {
        SortField::Id => a.id().cmp(&b.id()),
        SortField::Title => a.title().as_str().cmp(b.title().as_str()),
        SortField::Description => a.description().cmp(b.description()),
        SortField::Status => a.status().as_str().cmp(b.status().as_str()),
        SortField::Priority => priority_literal(a).cmp(priority_literal(b)),
        SortField::Project => names
            .resolve(a.project_id())
            .cmp(names.resolve(b.project_id())),
        SortField::DueDate => {
            let epoch = epoch_date();
            a.due_date()
                .unwrap_or(epoch)
                .cmp(&b.due_date().unwrap_or(epoch))
        }
        SortField::CreatedAt => a.created_at().cmp(&b.created_at()),
        SortField::CompletedAt => {
            let epoch = DateTime::<Utc>::UNIX_EPOCH;
            a.completed_at()
                .unwrap_or(epoch)
                .cmp(&b.completed_at().unwrap_or(epoch))
        }
    }
}

/// Sorts tasks in place. The sort is stable: ties keep their input order
/// in both directions.
pub fn sort_tasks(tasks: &mut [Task], groups: &[Group], sort: TaskSort) {
    let names = GroupNames::new(groups);
    tasks.sort_by(|a, b| sort.compare(a, b, &names));
}

/// Filters then sorts tasks the way the list view presents them.
#[must_use]
pub fn list_view(
    tasks: Vec<Task>,
    groups: &[Group],
    query: &SearchQuery,
    sort: TaskSort,
) -> Vec<Task> {
    let mut visible = filter_tasks(tasks, groups, query);
    sort_tasks(&mut visible, groups, sort);
    visible
}
