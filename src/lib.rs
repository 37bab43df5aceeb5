//! Taskboard: the data layer behind a kanban board and task list.
//!
//! This crate stores tasks, projects and teams in memory, keeps each task's
//! completion timestamp in step with its status, refuses to delete a
//! project or team that tasks still reference, and derives completion
//! statistics, search results and sorted lists from live snapshots.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Entities, value types and validation
//! - **Ports**: The generic [`store::ports::EntityRepository`] trait
//! - **Adapters**: The in-memory store, the deletion guard and the
//!   boundary adapters for external record shapes
//! - **Services**: Form handling and orchestration over repositories
//!
//! # Modules
//!
//! - [`store`]: Generic entity repository and its in-memory adapter
//! - [`task`]: Task model and lifecycle service
//! - [`group`]: Projects and teams with referential integrity
//! - [`board`]: Completion statistics, search, sorting and board columns
//! - [`config`]: Workspace configuration
//! - [`workspace`]: Composition root and seed loading

pub mod board;
pub mod config;
pub mod group;
pub mod store;
pub mod task;
pub mod workspace;
