//! Domain model for board tasks.

mod error;
mod status;
mod task;

pub use error::{ParsePriorityError, ParseTaskStatusError, TaskDomainError};
pub use status::{Priority, TaskStatus};
pub use task::{PersistedTaskData, Task, TaskDraft, TaskPatch, TaskTitle};
