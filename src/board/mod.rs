//! Read-side views computed from collection snapshots.
//!
//! Nothing here is cached: every function takes the current tasks and
//! groups and derives its result from scratch, so a view is always in step
//! with the last completed mutation.
//!
//! - [`stats`]: per-group completion statistics
//! - [`query`]: free-text search and list sorting
//! - [`columns`]: kanban column partitioning

pub mod columns;
pub mod query;
pub mod stats;
