//! Domain model for projects and teams.

mod color;
mod error;
mod group;

pub use color::GroupColor;
pub use error::GroupDomainError;
pub use group::{Group, GroupDraft, GroupName, GroupPatch, PersistedGroupData};
