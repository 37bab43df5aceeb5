//! Adapters for the group collections.

pub mod external;
pub mod guarded;
