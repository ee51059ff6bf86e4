//! In-memory gateway standing in for the task API in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{NewTask, Task, TaskId, TaskPatch},
    ports::{TaskGateway, TaskGatewayError, TaskGatewayResult},
};

/// Thread-safe in-memory task gateway.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskGateway {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    patches: Vec<(TaskId, TaskPatch)>,
}

impl InMemoryTaskGateway {
    /// Creates an empty in-memory gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a task as if the API already held it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::RemoteFailure`] when the state lock is
    /// poisoned.
    pub fn insert(&self, task: Task) -> TaskGatewayResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.tasks.insert(task.id().clone(), task);
        Ok(())
    }

    /// Returns every patch received so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::RemoteFailure`] when the state lock is
    /// poisoned.
    pub fn patches(&self) -> TaskGatewayResult<Vec<(TaskId, TaskPatch)>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.patches.clone())
    }
}

fn poisoned<T>(err: std::sync::PoisonError<T>) -> TaskGatewayError {
    TaskGatewayError::remote(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskGateway for InMemoryTaskGateway {
    async fn find_by_id(&self, id: &TaskId) -> TaskGatewayResult<Option<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.tasks.get(id).cloned())
    }

    async fn create(&self, task: &NewTask) -> TaskGatewayResult<Task> {
        let mut state = self.state.write().map_err(poisoned)?;
        let created = task.clone().into_task(TaskId::generate());
        state.tasks.insert(created.id().clone(), created.clone());
        Ok(created)
    }

    async fn patch(&self, id: &TaskId, patch: &TaskPatch) -> TaskGatewayResult<Task> {
        let mut state = self.state.write().map_err(poisoned)?;
        let current = state
            .tasks
            .remove(id)
            .ok_or_else(|| TaskGatewayError::NotFound(id.clone()))?;
        let updated = current.with_patch(patch);
        state.tasks.insert(id.clone(), updated.clone());
        state.patches.push((id.clone(), patch.clone()));
        Ok(updated)
    }
}
