//! Task statuses and the transitions between them.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Task has been captured and is not yet assigned.
    Saisie,
    /// Task has been assigned to a collaborator.
    Affectee,
    /// The assigned collaborator accepted the task.
    Acceptee,
    /// An execution date and address have been set.
    Planifiee,
    /// The collaborator filed a report; awaiting closure.
    Reportee,
    /// Task has been closed.
    Cloturee,
    /// Task has been cancelled.
    Annulee,
}

impl TaskStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [Self; 7] = [
        Self::Saisie,
        Self::Affectee,
        Self::Acceptee,
        Self::Planifiee,
        Self::Reportee,
        Self::Cloturee,
        Self::Annulee,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Saisie => "SAISIE",
            Self::Affectee => "AFFECTEE",
            Self::Acceptee => "ACCEPTEE",
            Self::Planifiee => "PLANIFIEE",
            Self::Reportee => "REPORTEE",
            Self::Cloturee => "CLOTUREE",
            Self::Annulee => "ANNULEE",
        }
    }

    /// Returns whether no further transition is possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Cloturee | Self::Annulee)
    }

    /// Returns the transitions permitted from this status, in table order.
    #[must_use]
    pub fn allowed_transitions(self) -> Vec<TaskTransition> {
        TaskTransition::ALL
            .into_iter()
            .filter(|transition| transition.is_allowed_from(self))
            .collect()
    }

    /// Returns whether some transition leads from this status to `target`.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        TaskTransition::ALL
            .into_iter()
            .any(|transition| transition.is_allowed_from(self) && transition.target() == target)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "SAISIE" => Ok(Self::Saisie),
            "AFFECTEE" => Ok(Self::Affectee),
            "ACCEPTEE" => Ok(Self::Acceptee),
            "PLANIFIEE" => Ok(Self::Planifiee),
            "REPORTEE" => Ok(Self::Reportee),
            "CLOTUREE" => Ok(Self::Cloturee),
            "ANNULEE" => Ok(Self::Annulee),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Named operation that moves a task from one status to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskTransition {
    /// Assign the task to a collaborator.
    Assign,
    /// Collaborator accepts the assignment.
    Accept,
    /// Set the execution date and address.
    Plan,
    /// File the intervention report.
    Report,
    /// Close the task.
    Complete,
    /// Cancel the task.
    Cancel,
}

impl TaskTransition {
    /// All transitions in table order.
    pub const ALL: [Self; 6] = [
        Self::Assign,
        Self::Accept,
        Self::Plan,
        Self::Report,
        Self::Complete,
        Self::Cancel,
    ];

    /// Returns the operation name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assign => "assign",
            Self::Accept => "accept",
            Self::Plan => "plan",
            Self::Report => "report",
            Self::Complete => "complete",
            Self::Cancel => "cancel",
        }
    }

    /// Returns whether the transition may start from `status`.
    #[must_use]
    pub const fn is_allowed_from(self, status: TaskStatus) -> bool {
        match self {
            Self::Assign => matches!(status, TaskStatus::Saisie),
            Self::Accept => matches!(status, TaskStatus::Affectee),
            Self::Plan => matches!(status, TaskStatus::Acceptee),
            Self::Report => matches!(status, TaskStatus::Planifiee),
            Self::Complete => matches!(status, TaskStatus::Reportee),
            Self::Cancel => !status.is_terminal(),
        }
    }

    /// Returns the status the task ends up in.
    #[must_use]
    pub const fn target(self) -> TaskStatus {
        match self {
            Self::Assign => TaskStatus::Affectee,
            Self::Accept => TaskStatus::Acceptee,
            Self::Plan => TaskStatus::Planifiee,
            Self::Report => TaskStatus::Reportee,
            Self::Complete => TaskStatus::Cloturee,
            Self::Cancel => TaskStatus::Annulee,
        }
    }
}

impl fmt::Display for TaskTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
