//! Service layer for task creation and status transitions.

use crate::{
    access::Actor,
    reference::{ClientId, CollaboratorId, ProjectId, TaskTypeId},
    task::{
        domain::{NewTask, Task, TaskCommand, TaskDomainError, TaskId, TransitionOptions},
        ports::{TaskGateway, TaskGatewayError},
    },
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    task_type: String,
    client: String,
    project: String,
    description: Option<String>,
    address: Option<String>,
    notes: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        task_type: impl Into<String>,
        client: impl Into<String>,
        project: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            task_type: task_type.into(),
            client: client.into(),
            project: project.into(),
            description: None,
            address: None,
            notes: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets free-text notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed; nothing was sent to the gateway.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Gateway operation failed.
    #[error(transparent)]
    Gateway(TaskGatewayError),
    /// The task does not exist, whether found missing on load or on write.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

impl From<TaskGatewayError> for TaskLifecycleError {
    fn from(err: TaskGatewayError) -> Self {
        match err {
            TaskGatewayError::NotFound(id) => Self::NotFound(id),
            other @ TaskGatewayError::RemoteFailure(_) => Self::Gateway(other),
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle controller.
///
/// Each operation loads the current snapshot, validates the transition
/// against it, and sends exactly one patch to the gateway. The returned task
/// is the gateway's canonical record.
#[derive(Clone)]
pub struct TaskLifecycleService<G, C>
where
    G: TaskGateway,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    clock: Arc<C>,
}

impl<G, C> TaskLifecycleService<G, C>
where
    G: TaskGateway,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(gateway: Arc<G>, clock: Arc<C>) -> Self {
        Self { gateway, clock }
    }

    /// Creates a task in status `SAISIE`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when the title is blank or the gateway
    /// rejects the creation.
    #[tracing::instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let mut draft = NewTask::new(
            request.title,
            TaskTypeId::new(request.task_type),
            ClientId::new(request.client),
            ProjectId::new(request.project),
            &*self.clock,
        )?;
        if let Some(description) = request.description {
            draft = draft.with_description(description);
        }
        if let Some(address) = request.address {
            draft = draft.with_address(address);
        }
        if let Some(notes) = request.notes {
            draft = draft.with_notes(notes);
        }

        let created = self.gateway.create(&draft).await?;
        tracing::info!(task_id = %created.id(), "task created");
        Ok(created)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Gateway`] when the lookup fails.
    pub async fn find_task(&self, id: &TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.gateway.find_by_id(id).await?)
    }

    /// Returns the task's current status and the transitions `actor` may
    /// trigger next.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// or [`TaskLifecycleError::Gateway`] when the lookup fails.
    pub async fn transition_options(
        &self,
        id: &TaskId,
        actor: &Actor,
    ) -> TaskLifecycleResult<TransitionOptions> {
        let task = self.load(id).await?;
        Ok(task.transition_options(actor))
    }

    /// Validates and applies `command` to the task.
    ///
    /// Guard failures are reported before any write reaches the gateway.
    /// Gateway failures are returned as-is and never retried.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the transition is not
    /// permitted, [`TaskLifecycleError::NotFound`] when the task does not
    /// exist, or [`TaskLifecycleError::Gateway`] when the remote call fails.
    #[tracing::instrument(
        skip(self, command, actor),
        fields(task_id = %id, transition = %command.transition(), role = %actor.role())
    )]
    pub async fn transition(
        &self,
        id: &TaskId,
        command: &TaskCommand,
        actor: &Actor,
    ) -> TaskLifecycleResult<Task> {
        let current = self.load(id).await?;
        let patch = current.prepare_transition(command, actor).inspect_err(|err| {
            tracing::warn!(%err, "task transition rejected");
        })?;

        let updated = self.gateway.patch(id, &patch).await.inspect_err(|err| {
            tracing::warn!(%err, "task update failed");
        })?;
        tracing::info!(
            from = %current.status(),
            to = %updated.status(),
            "task transitioned"
        );
        Ok(updated)
    }

    /// Assigns the task to `collaborator` (`SAISIE` → `AFFECTEE`).
    ///
    /// # Errors
    ///
    /// See [`Self::transition`].
    pub async fn assign(
        &self,
        id: &TaskId,
        collaborator: CollaboratorId,
        actor: &Actor,
    ) -> TaskLifecycleResult<Task> {
        self.transition(id, &TaskCommand::assign(collaborator), actor)
            .await
    }

    /// Accepts the assignment (`AFFECTEE` → `ACCEPTEE`).
    ///
    /// # Errors
    ///
    /// See [`Self::transition`].
    pub async fn accept(&self, id: &TaskId, actor: &Actor) -> TaskLifecycleResult<Task> {
        self.transition(id, &TaskCommand::Accept, actor).await
    }

    /// Plans the intervention (`ACCEPTEE` → `PLANIFIEE`).
    ///
    /// # Errors
    ///
    /// See [`Self::transition`].
    pub async fn plan(
        &self,
        id: &TaskId,
        execution_date: NaiveDate,
        address: impl Into<String>,
        actor: &Actor,
    ) -> TaskLifecycleResult<Task> {
        self.transition(id, &TaskCommand::plan(execution_date, address), actor)
            .await
    }

    /// Files the intervention report (`PLANIFIEE` → `REPORTEE`).
    ///
    /// # Errors
    ///
    /// See [`Self::transition`].
    pub async fn report(
        &self,
        id: &TaskId,
        text: impl Into<String>,
        actor: &Actor,
    ) -> TaskLifecycleResult<Task> {
        self.transition(id, &TaskCommand::report(text), actor).await
    }

    /// Closes the task (`REPORTEE` → `CLOTUREE`).
    ///
    /// # Errors
    ///
    /// See [`Self::transition`].
    pub async fn complete(
        &self,
        id: &TaskId,
        text: impl Into<String>,
        actor: &Actor,
    ) -> TaskLifecycleResult<Task> {
        self.transition(id, &TaskCommand::complete(text), actor).await
    }

    /// Cancels the task from any non-terminal status.
    ///
    /// # Errors
    ///
    /// See [`Self::transition`].
    pub async fn cancel(
        &self,
        id: &TaskId,
        reason: impl Into<String>,
        actor: &Actor,
    ) -> TaskLifecycleResult<Task> {
        self.transition(id, &TaskCommand::cancel(reason), actor).await
    }

    async fn load(&self, id: &TaskId) -> TaskLifecycleResult<Task> {
        self.gateway
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskLifecycleError::NotFound(id.clone()))
    }
}
