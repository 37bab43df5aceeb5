//! Generic entity storage with identity allocation.
//!
//! Every collection in the crate (tasks, projects, teams) is held by the
//! same repository contract. The module follows the hexagonal layout used
//! throughout the crate:
//!
//! - Entity and identifier types in [`domain`]
//! - The repository port in [`ports`]
//! - The in-memory adapter in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
