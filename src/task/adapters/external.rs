//! Boundary adapter for task records coming from the backend or seed files.
//!
//! Backend records mix capitalized and lowercase field names (`Id`/`id`,
//! `Title`/`title`). Every alias is resolved here, once, so nothing past
//! this module sees the external shape.

use crate::store::domain::EntityId;
use crate::task::domain::{
    ParsePriorityError, ParseTaskStatusError, PersistedTaskData, Priority, Task, TaskDomainError,
    TaskStatus, TaskTitle,
};
use crate::task::services::parse_due_date;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use thiserror::Error;

/// Task record as delivered by an external store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalTaskRecord {
    /// Record identifier.
    #[serde(rename = "Id", alias = "id")]
    pub id: u64,
    /// Task title.
    #[serde(alias = "Title")]
    pub title: String,
    /// Task description.
    #[serde(default, alias = "Description")]
    pub description: Option<String>,
    /// Status literal.
    #[serde(default)]
    pub status: Option<String>,
    /// Priority literal, possibly empty.
    #[serde(default)]
    pub priority: Option<String>,
    /// Referenced project or team.
    #[serde(default)]
    pub project_id: Option<u64>,
    /// Due date as a date or RFC 3339 timestamp.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Creation timestamp (RFC 3339).
    #[serde(default)]
    pub created_at: Option<String>,
    /// Completion timestamp (RFC 3339).
    #[serde(default)]
    pub completed_at: Option<String>,
}

/// Errors raised while mapping an external task record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskRecordError {
    /// A field failed domain validation.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The status literal is unknown.
    #[error(transparent)]
    Status(#[from] ParseTaskStatusError),
    /// The priority literal is unknown.
    #[error(transparent)]
    Priority(#[from] ParsePriorityError),
}

impl ExternalTaskRecord {
    /// Maps the record to a domain task.
    ///
    /// `imported_at` stands in for a missing creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRecordError`] when any field fails validation.
    pub fn into_task(self, imported_at: DateTime<Utc>) -> Result<Task, TaskRecordError> {
        let status = self
            .status
            .as_deref()
            .map(TaskStatus::try_from)
            .transpose()?
            .unwrap_or_default();
        let priority = self
            .priority
            .as_deref()
            .map(Priority::parse_optional)
            .transpose()?
            .flatten();
        let due_date = self.due_date.as_deref().map(parse_record_date).transpose()?;
        let created_at = self
            .created_at
            .as_deref()
            .map(parse_timestamp)
            .transpose()?
            .unwrap_or(imported_at);
        let completed_at = self
            .completed_at
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;

        Ok(Task::from_persisted(PersistedTaskData {
            id: EntityId::new(self.id),
            title: TaskTitle::new(self.title)?,
            description: self.description.unwrap_or_default(),
            status,
            priority,
            project_id: self.project_id.map(EntityId::new),
            due_date: due_date.flatten(),
            created_at,
            completed_at,
        }))
    }
}

/// Parses an RFC 3339 timestamp into UTC.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidTimestamp`] for anything else.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, TaskDomainError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|_| TaskDomainError::InvalidTimestamp(value.to_owned()))
}

fn parse_record_date(value: &str) -> Result<Option<NaiveDate>, TaskDomainError> {
    parse_due_date(value).or_else(|err| {
        parse_timestamp(value)
            .map(|timestamp| Some(timestamp.date_naive()))
            .map_err(|_| err)
    })
}
