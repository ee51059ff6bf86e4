//! Wire models for task endpoints.

use crate::{
    api::wire::{self, Reference, StatusWire},
    reference::{ClientId, CollaboratorId, ProjectId, TaskTypeId},
    task::domain::{
        NewTask, ParseTaskStatusError, PersistedTaskData, Task, TaskId, TaskPatch, TaskStatus,
    },
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

fn status_from_wire(status: StatusWire) -> Result<TaskStatus, ParseTaskStatusError> {
    TaskStatus::try_from(status.into_code().as_str())
}

/// Task document returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct TaskRecord {
    #[serde(rename = "_id")]
    id: String,
    titre_tache: String,
    type_tache: Reference,
    client: Reference,
    projet: Reference,
    #[serde(default)]
    collaborateur: Option<Reference>,
    #[serde(deserialize_with = "wire::timestamp")]
    date_creation_tache: DateTime<Utc>,
    #[serde(default, deserialize_with = "wire::optional_date")]
    date_execution_tache: Option<NaiveDate>,
    #[serde(default)]
    description_tache: Option<String>,
    #[serde(default)]
    adresse_tache: Option<String>,
    #[serde(default)]
    rapport_tache: Option<String>,
    statut_tache: StatusWire,
    #[serde(default)]
    remarque_tache: Option<String>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = ParseTaskStatusError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let status = status_from_wire(record.statut_tache)?;
        Ok(Self::from_persisted(PersistedTaskData {
            id: TaskId::new(record.id),
            title: record.titre_tache,
            task_type: TaskTypeId::new(record.type_tache.into_id()),
            client: ClientId::new(record.client.into_id()),
            project: ProjectId::new(record.projet.into_id()),
            collaborator: record
                .collaborateur
                .map(|reference| CollaboratorId::new(reference.into_id())),
            created_at: record.date_creation_tache,
            execution_date: record.date_execution_tache,
            description: record.description_tache,
            address: record.adresse_tache,
            report: record.rapport_tache,
            status,
            notes: record.remarque_tache,
        }))
    }
}

/// Body of `POST /tasks`.
#[derive(Debug, Serialize)]
pub(super) struct NewTaskBody<'a> {
    titre_tache: &'a str,
    type_tache: &'a str,
    client: &'a str,
    projet: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description_tache: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    adresse_tache: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remarque_tache: Option<&'a str>,
    date_creation_tache: DateTime<Utc>,
    statut_tache: &'static str,
}

impl<'a> From<&'a NewTask> for NewTaskBody<'a> {
    fn from(task: &'a NewTask) -> Self {
        Self {
            titre_tache: task.title(),
            type_tache: task.task_type().as_str(),
            client: task.client().as_str(),
            projet: task.project().as_str(),
            description_tache: task.description(),
            adresse_tache: task.address(),
            remarque_tache: task.notes(),
            date_creation_tache: task.created_at(),
            statut_tache: TaskStatus::Saisie.as_str(),
        }
    }
}

/// Body of `PATCH /tasks/{id}`.
#[derive(Debug, Serialize)]
pub(super) struct TaskPatchBody<'a> {
    statut_tache: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    collaborateur: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_execution_tache: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    adresse_tache: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rapport_tache: Option<&'a str>,
}

impl<'a> From<&'a TaskPatch> for TaskPatchBody<'a> {
    fn from(patch: &'a TaskPatch) -> Self {
        Self {
            statut_tache: patch.status.as_str(),
            collaborateur: patch.collaborator.as_ref().map(CollaboratorId::as_str),
            date_execution_tache: patch.execution_date,
            adresse_tache: patch.address.as_deref(),
            rapport_tache: patch.report.as_deref(),
        }
    }
}
