//! Task records and their status lifecycle.
//!
//! A task's completion timestamp is a pure function of its status: moving
//! into `done` stamps it with the mutation time, any other status clears
//! it. Any status may move to any other directly; the board does not impose
//! a workflow order. The module follows the crate's hexagonal layout:
//!
//! - Domain types in [`domain`]
//! - The boundary adapter for external record shapes in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod services;
