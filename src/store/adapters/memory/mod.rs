//! In-memory storage adapter.

mod repository;

pub use repository::InMemoryRepository;
