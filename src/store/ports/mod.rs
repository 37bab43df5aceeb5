//! Port contracts for entity storage.

pub mod repository;

pub use repository::{EntityRepository, RepositoryError, RepositoryResult};
