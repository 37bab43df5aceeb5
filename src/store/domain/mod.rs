//! Domain vocabulary shared by every stored entity.

mod entity;
mod ids;

pub use entity::{Entity, EntityKind};
pub use ids::{EntityId, ParseEntityIdError};
