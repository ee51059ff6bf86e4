//! Task aggregate root and transition validation.

use super::{
    TaskCommand, TaskDomainError, TaskField, TaskId, TaskPatch, TaskStatus, TaskTransition,
    TransitionOptions,
};
use crate::{
    access::Actor,
    reference::{ClientId, CollaboratorId, ProjectId, TaskTypeId},
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated request to create a task, before the API assigns an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    title: String,
    task_type: TaskTypeId,
    client: ClientId,
    project: ProjectId,
    description: Option<String>,
    address: Option<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl NewTask {
    /// Creates a task draft stamped with the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn new(
        title: impl Into<String>,
        task_type: TaskTypeId,
        client: ClientId,
        project: ProjectId,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let raw_title = title.into();
        let trimmed = raw_title.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        Ok(Self {
            title: trimmed.to_owned(),
            task_type,
            client,
            project,
            description: None,
            address: None,
            notes: None,
            created_at: clock.utc(),
        })
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

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task type.
    #[must_use]
    pub const fn task_type(&self) -> &TaskTypeId {
        &self.task_type
    }

    /// Returns the client.
    #[must_use]
    pub const fn client(&self) -> &ClientId {
        &self.client
    }

    /// Returns the project.
    #[must_use]
    pub const fn project(&self) -> &ProjectId {
        &self.project
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the address, if any.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Returns the notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Turns the draft into a task in [`TaskStatus::Saisie`].
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task::from_persisted(PersistedTaskData {
            id,
            title: self.title,
            task_type: self.task_type,
            client: self.client,
            project: self.project,
            collaborator: None,
            created_at: self.created_at,
            execution_date: None,
            description: self.description,
            address: self.address,
            report: None,
            status: TaskStatus::Saisie,
            notes: self.notes,
        })
    }
}

/// Parameter object for reconstructing a task returned by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Task identifier.
    pub id: TaskId,
    /// Title.
    pub title: String,
    /// Task type.
    pub task_type: TaskTypeId,
    /// Client.
    pub client: ClientId,
    /// Project.
    pub project: ProjectId,
    /// Assigned collaborator, if any.
    pub collaborator: Option<CollaboratorId>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Execution date, if planned.
    pub execution_date: Option<NaiveDate>,
    /// Description.
    pub description: Option<String>,
    /// Intervention address.
    pub address: Option<String>,
    /// Report text.
    pub report: Option<String>,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Free-text notes.
    pub notes: Option<String>,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    task_type: TaskTypeId,
    client: ClientId,
    project: ProjectId,
    collaborator: Option<CollaboratorId>,
    created_at: DateTime<Utc>,
    execution_date: Option<NaiveDate>,
    description: Option<String>,
    address: Option<String>,
    report: Option<String>,
    status: TaskStatus,
    notes: Option<String>,
}

impl Task {
    /// Reconstructs a task from its persisted representation.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            task_type: data.task_type,
            client: data.client,
            project: data.project,
            collaborator: data.collaborator,
            created_at: data.created_at,
            execution_date: data.execution_date,
            description: data.description,
            address: data.address,
            report: data.report,
            status: data.status,
            notes: data.notes,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task type.
    #[must_use]
    pub const fn task_type(&self) -> &TaskTypeId {
        &self.task_type
    }

    /// Returns the client.
    #[must_use]
    pub const fn client(&self) -> &ClientId {
        &self.client
    }

    /// Returns the project.
    #[must_use]
    pub const fn project(&self) -> &ProjectId {
        &self.project
    }

    /// Returns the assigned collaborator, if any.
    #[must_use]
    pub const fn collaborator(&self) -> Option<&CollaboratorId> {
        self.collaborator.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the execution date, if planned.
    #[must_use]
    pub const fn execution_date(&self) -> Option<NaiveDate> {
        self.execution_date
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the intervention address, if any.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Returns the report text, if any.
    #[must_use]
    pub fn report(&self) -> Option<&str> {
        self.report.as_deref()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Validates `command` against this snapshot and builds the update to
    /// persist.
    ///
    /// The task itself is left untouched; the caller hands the patch to the
    /// gateway and adopts whatever record the gateway returns.
    ///
    /// # Errors
    ///
    /// - [`TaskDomainError::PreconditionFailed`] when the command sets an
    ///   execution date and no collaborator is known.
    /// - [`TaskDomainError::InvalidTransition`] when the current status does
    ///   not permit the transition.
    /// - [`TaskDomainError::MissingField`] when a required payload field is
    ///   absent or blank.
    /// - [`TaskDomainError::NotAssignee`] when `actor` may not accept.
    pub fn prepare_transition(
        &self,
        command: &TaskCommand,
        actor: &Actor,
    ) -> Result<TaskPatch, TaskDomainError> {
        let transition = command.transition();
        self.ensure_schedulable(command)?;
        if !transition.is_allowed_from(self.status) {
            return Err(TaskDomainError::InvalidTransition {
                task_id: self.id.clone(),
                from: self.status,
                transition,
            });
        }

        let patch = TaskPatch::status(transition.target());
        match command {
            TaskCommand::Assign {
                collaborator,
                execution_date,
            } => {
                let assignee = collaborator.clone().ok_or(TaskDomainError::MissingField {
                    transition,
                    field: TaskField::Collaborator,
                })?;
                Ok(patch
                    .with_collaborator(assignee)
                    .with_execution_date(*execution_date))
            }
            TaskCommand::Accept => {
                self.ensure_may_accept(actor)?;
                Ok(patch)
            }
            TaskCommand::Plan {
                execution_date,
                address,
            } => {
                let date = execution_date.ok_or(TaskDomainError::MissingField {
                    transition,
                    field: TaskField::ExecutionDate,
                })?;
                let place = required_text(address.as_deref(), transition, TaskField::Address)?;
                Ok(patch.with_execution_date(Some(date)).with_address(place))
            }
            TaskCommand::Report { text } | TaskCommand::Complete { text } => {
                let report =
                    required_text(Some(text.as_str()), transition, TaskField::Report)?;
                Ok(patch.with_report(report))
            }
            TaskCommand::Cancel { reason } => {
                let report =
                    required_text(Some(reason.as_str()), transition, TaskField::Reason)?;
                Ok(patch.with_report(report))
            }
        }
    }

    /// Returns the current status and the transitions `actor` may trigger.
    #[must_use]
    pub fn transition_options(&self, actor: &Actor) -> TransitionOptions {
        let transitions = self
            .status
            .allowed_transitions()
            .into_iter()
            .filter(|transition| {
                *transition != TaskTransition::Accept || self.ensure_may_accept(actor).is_ok()
            })
            .collect();
        TransitionOptions {
            status: self.status,
            transitions,
        }
    }

    /// Applies a patch the way the API does when persisting it.
    #[must_use]
    pub fn with_patch(mut self, patch: &TaskPatch) -> Self {
        self.status = patch.status;
        if let Some(collaborator) = &patch.collaborator {
            self.collaborator = Some(collaborator.clone());
        }
        if let Some(date) = patch.execution_date {
            self.execution_date = Some(date);
        }
        if let Some(address) = &patch.address {
            self.address = Some(address.clone());
        }
        if let Some(report) = &patch.report {
            self.report = Some(report.clone());
        }
        self
    }

    fn ensure_schedulable(&self, command: &TaskCommand) -> Result<(), TaskDomainError> {
        if command.execution_date().is_none() {
            return Ok(());
        }
        let supplied = matches!(
            command,
            TaskCommand::Assign {
                collaborator: Some(_),
                ..
            }
        );
        if supplied || self.collaborator.is_some() {
            Ok(())
        } else {
            Err(TaskDomainError::PreconditionFailed(self.id.clone()))
        }
    }

    fn ensure_may_accept(&self, actor: &Actor) -> Result<(), TaskDomainError> {
        let is_assignee = self
            .collaborator
            .as_ref()
            .is_some_and(|collaborator| actor.is_collaborator(collaborator));
        if actor.role().is_privileged() || is_assignee {
            Ok(())
        } else {
            Err(TaskDomainError::NotAssignee {
                task_id: self.id.clone(),
                user_id: actor.user_id().clone(),
            })
        }
    }
}

/// Returns the trimmed text, or a missing-field error when blank.
fn required_text(
    value: Option<&str>,
    transition: TaskTransition,
    field: TaskField,
) -> Result<String, TaskDomainError> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
        .ok_or(TaskDomainError::MissingField { transition, field })
}
