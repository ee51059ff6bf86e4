//! Unit tests for the task lifecycle.


use crate::{
    reference::{ClientId, CollaboratorId, ProjectId, TaskTypeId},
    task::domain::{PersistedTaskData, Task, TaskId, TaskStatus},
};
use chrono::{DateTime, Utc};

/// Builds a task snapshot in `status` with an optional collaborator.
pub(super) fn task_in(status: TaskStatus, collaborator: Option<&str>) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new("task-1"),
        title: "Replace boiler valve".to_owned(),
        task_type: TaskTypeId::new("type-maintenance"),
        client: ClientId::new("client-7"),
        project: ProjectId::new("project-3"),
        collaborator: collaborator.map(CollaboratorId::new),
        created_at: DateTime::<Utc>::UNIX_EPOCH,
        execution_date: None,
        description: None,
        address: None,
        report: None,
        status,
        notes: None,
    })
}
