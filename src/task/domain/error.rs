//! Error types for task domain validation and parsing.

use super::{TaskField, TaskId, TaskStatus, TaskTransition};
use crate::reference::UserId;
use thiserror::Error;

/// Errors returned while validating task creation and transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task's current status does not permit the requested transition.
    #[error("task {task_id} cannot {transition} from status {from}")]
    InvalidTransition {
        /// Task the transition targeted.
        task_id: TaskId,
        /// Status the task was in.
        from: TaskStatus,
        /// Rejected transition.
        transition: TaskTransition,
    },

    /// A field required by the transition is absent or blank.
    #[error("{transition} requires a non-empty {field}")]
    MissingField {
        /// Transition being attempted.
        transition: TaskTransition,
        /// Missing field.
        field: TaskField,
    },

    /// An execution date was supplied while no collaborator is assigned.
    #[error("task {0} has no collaborator, an execution date cannot be set")]
    PreconditionFailed(TaskId),

    /// A non-privileged actor tried to accept a task assigned to someone else.
    #[error("user {user_id} is not the collaborator assigned to task {task_id}")]
    NotAssignee {
        /// Task the acceptance targeted.
        task_id: TaskId,
        /// User that attempted the acceptance.
        user_id: UserId,
    },

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,
}

/// Error returned while parsing task statuses from the API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
