//! Domain model for the task lifecycle.
//!
//! Tasks move through seven statuses. Every status change goes through a
//! [`TaskCommand`]; the domain validates it against the current snapshot and
//! produces the [`TaskPatch`] that the gateway persists. The domain never
//! mutates durable state itself.

mod command;
mod error;
mod ids;
mod status;
mod task;

pub use command::{TaskCommand, TaskField, TaskPatch, TransitionOptions};
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use status::{TaskStatus, TaskTransition};
pub use task::{NewTask, PersistedTaskData, Task};
