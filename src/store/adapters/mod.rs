//! Adapter implementations for entity storage.

pub mod memory;
