//! Gateway port for reading and updating task records held by the API.

use crate::task::domain::{NewTask, Task, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task gateway operations.
pub type TaskGatewayResult<T> = Result<T, TaskGatewayError>;

/// Task persistence contract.
///
/// The gateway is the source of truth: every write returns the canonical
/// record as the API stored it.
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: &TaskId) -> TaskGatewayResult<Option<Task>>;

    /// Creates a task and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::RemoteFailure`] when the API rejects the
    /// request.
    async fn create(&self, task: &NewTask) -> TaskGatewayResult<Task>;

    /// Applies a partial update and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::NotFound`] when the task does not exist.
    async fn patch(&self, id: &TaskId, patch: &TaskPatch) -> TaskGatewayResult<Task>;
}

/// Errors returned by task gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskGatewayError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The remote call failed or returned a non-success status.
    #[error("remote failure: {0}")]
    RemoteFailure(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskGatewayError {
    /// Wraps a transport or API error.
    pub fn remote(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::RemoteFailure(Arc::new(err))
    }
}
