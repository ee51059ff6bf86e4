//! Transition commands and the partial updates they produce.

use super::{TaskStatus, TaskTransition};
use crate::reference::CollaboratorId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payload-carrying request for one task transition.
///
/// Text payloads are considered missing when blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskCommand {
    /// Assign the task, optionally scheduling it in the same step.
    Assign {
        /// Collaborator receiving the task.
        collaborator: Option<CollaboratorId>,
        /// Execution date set together with the assignment.
        execution_date: Option<NaiveDate>,
    },
    /// Accept the assignment.
    Accept,
    /// Plan the intervention.
    Plan {
        /// Intervention date.
        execution_date: Option<NaiveDate>,
        /// Intervention address.
        address: Option<String>,
    },
    /// File the intervention report.
    Report {
        /// Report text.
        text: String,
    },
    /// Close the task with a completion report.
    Complete {
        /// Completion report text.
        text: String,
    },
    /// Cancel the task.
    Cancel {
        /// Cancellation reason, stored as the report text.
        reason: String,
    },
}

impl TaskCommand {
    /// Assigns the task to `collaborator`.
    #[must_use]
    pub const fn assign(collaborator: CollaboratorId) -> Self {
        Self::Assign {
            collaborator: Some(collaborator),
            execution_date: None,
        }
    }

    /// Assigns the task to `collaborator` and sets its execution date.
    #[must_use]
    pub const fn assign_on(collaborator: CollaboratorId, execution_date: NaiveDate) -> Self {
        Self::Assign {
            collaborator: Some(collaborator),
            execution_date: Some(execution_date),
        }
    }

    /// Plans the intervention at `address` on `execution_date`.
    #[must_use]
    pub fn plan(execution_date: NaiveDate, address: impl Into<String>) -> Self {
        Self::Plan {
            execution_date: Some(execution_date),
            address: Some(address.into()),
        }
    }

    /// Files a report.
    #[must_use]
    pub fn report(text: impl Into<String>) -> Self {
        Self::Report { text: text.into() }
    }

    /// Closes the task.
    #[must_use]
    pub fn complete(text: impl Into<String>) -> Self {
        Self::Complete { text: text.into() }
    }

    /// Cancels the task.
    #[must_use]
    pub fn cancel(reason: impl Into<String>) -> Self {
        Self::Cancel {
            reason: reason.into(),
        }
    }

    /// Returns the transition this command requests.
    #[must_use]
    pub const fn transition(&self) -> TaskTransition {
        match self {
            Self::Assign { .. } => TaskTransition::Assign,
            Self::Accept => TaskTransition::Accept,
            Self::Plan { .. } => TaskTransition::Plan,
            Self::Report { .. } => TaskTransition::Report,
            Self::Complete { .. } => TaskTransition::Complete,
            Self::Cancel { .. } => TaskTransition::Cancel,
        }
    }

    /// Returns the execution date the command would set, if any.
    #[must_use]
    pub const fn execution_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Assign { execution_date, .. } | Self::Plan { execution_date, .. } => {
                *execution_date
            }
            Self::Accept | Self::Report { .. } | Self::Complete { .. } | Self::Cancel { .. } => {
                None
            }
        }
    }
}

/// Task field named in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// Assigned collaborator.
    Collaborator,
    /// Execution date.
    ExecutionDate,
    /// Intervention address.
    Address,
    /// Report text.
    Report,
    /// Cancellation reason.
    Reason,
}

impl TaskField {
    /// Returns the field's wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Collaborator => "collaborateur",
            Self::ExecutionDate => "date_execution_tache",
            Self::Address => "adresse_tache",
            Self::Report => "rapport_tache",
            Self::Reason => "motif_annulation",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Partial update sent to the gateway for one transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    /// New status.
    pub status: TaskStatus,
    /// Collaborator to assign.
    pub collaborator: Option<CollaboratorId>,
    /// Execution date to set.
    pub execution_date: Option<NaiveDate>,
    /// Address to set.
    pub address: Option<String>,
    /// Report text to set.
    pub report: Option<String>,
}

impl TaskPatch {
    /// Creates a patch that only changes the status.
    #[must_use]
    pub const fn status(status: TaskStatus) -> Self {
        Self {
            status,
            collaborator: None,
            execution_date: None,
            address: None,
            report: None,
        }
    }

    /// Sets the collaborator.
    #[must_use]
    pub fn with_collaborator(mut self, collaborator: CollaboratorId) -> Self {
        self.collaborator = Some(collaborator);
        self
    }

    /// Sets the execution date.
    #[must_use]
    pub const fn with_execution_date(mut self, execution_date: Option<NaiveDate>) -> Self {
        self.execution_date = execution_date;
        self
    }

    /// Sets the address.
    #[must_use]
    pub fn with_address(mut self, address: String) -> Self {
        self.address = Some(address);
        self
    }

    /// Sets the report text.
    #[must_use]
    pub fn with_report(mut self, report: String) -> Self {
        self.report = Some(report);
        self
    }
}

/// Current status of a task and the transitions its viewer may trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionOptions {
    /// Current status.
    pub status: TaskStatus,
    /// Transitions available to the actor, in table order.
    pub transitions: Vec<TaskTransition>,
}

impl TransitionOptions {
    /// Returns whether `transition` is offered.
    #[must_use]
    pub fn allows(&self, transition: TaskTransition) -> bool {
        self.transitions.contains(&transition)
    }
}
