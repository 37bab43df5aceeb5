//! Boundary adapter for project and team records from external stores.
//!
//! The backend reports names as `Name` while forms and seed files use
//! `name`; both resolve here and nowhere else.

use crate::group::domain::{Group, GroupColor, GroupDomainError, GroupName, PersistedGroupData};
use crate::store::domain::EntityId;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Project or team record as delivered by an external store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalGroupRecord {
    /// Record identifier.
    #[serde(rename = "Id", alias = "id")]
    pub id: u64,
    /// Display name.
    #[serde(alias = "Name")]
    pub name: String,
    /// Color literal; blue when absent.
    #[serde(default)]
    pub color: Option<String>,
    /// Informational task counter.
    #[serde(default)]
    pub task_count: Option<u32>,
    /// Creation timestamp (RFC 3339).
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ExternalGroupRecord {
    /// Maps the record to a domain group.
    ///
    /// `imported_at` stands in for a missing creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`GroupDomainError`] when the name is blank, the color is not
    /// in the palette, or the timestamp is malformed.
    pub fn into_group(self, imported_at: DateTime<Utc>) -> Result<Group, GroupDomainError> {
        let color = self
            .color
            .as_deref()
            .map(GroupColor::try_from)
            .transpose()?
            .unwrap_or_default();
        let created_at = self
            .created_at
            .as_deref()
            .map(|raw| {
                DateTime::parse_from_rfc3339(raw.trim())
                    .map(|timestamp| timestamp.with_timezone(&Utc))
                    .map_err(|_| GroupDomainError::InvalidTimestamp(raw.to_owned()))
            })
            .transpose()?
            .unwrap_or(imported_at);

        Ok(Group::from_persisted(PersistedGroupData {
            id: EntityId::new(self.id),
            name: GroupName::new(self.name)?,
            color,
            task_count: self.task_count.unwrap_or_default(),
            created_at,
        }))
    }
}
