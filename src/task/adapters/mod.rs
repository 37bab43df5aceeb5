//! Adapters translating external task records into domain tasks.

pub mod external;
