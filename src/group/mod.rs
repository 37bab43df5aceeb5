//! Projects and teams: the groupings tasks are filed under.
//!
//! Both collections store the same [`domain::Group`] type and differ only
//! in the [`crate::store::domain::EntityKind`] their repository carries.
//! A group cannot be deleted while any task still references it; the
//! check lives in [`adapters::guarded`].

pub mod adapters;
pub mod domain;
pub mod services;
