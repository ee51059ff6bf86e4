//! [`TaskGateway`] over the remote REST API.

use super::models::{NewTaskBody, TaskPatchBody, TaskRecord};
use crate::{
    api::ApiClient,
    task::{
        domain::{NewTask, Task, TaskId, TaskPatch},
        ports::{TaskGateway, TaskGatewayError, TaskGatewayResult},
    },
};
use async_trait::async_trait;

/// Task gateway calling `/tasks` endpoints.
#[derive(Debug, Clone)]
pub struct HttpTaskGateway {
    client: ApiClient,
}

impl HttpTaskGateway {
    /// Creates a gateway using `client`.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

fn into_task(record: TaskRecord) -> TaskGatewayResult<Task> {
    Task::try_from(record).map_err(TaskGatewayError::remote)
}

#[async_trait]
impl TaskGateway for HttpTaskGateway {
    async fn find_by_id(&self, id: &TaskId) -> TaskGatewayResult<Option<Task>> {
        let record: Option<TaskRecord> = self
            .client
            .get_optional(&format!("/tasks/{id}"))
            .await
            .map_err(TaskGatewayError::remote)?;
        record.map(into_task).transpose()
    }

    async fn create(&self, task: &NewTask) -> TaskGatewayResult<Task> {
        let record: TaskRecord = self
            .client
            .post("/tasks", &NewTaskBody::from(task))
            .await
            .map_err(TaskGatewayError::remote)?;
        into_task(record)
    }

    async fn patch(&self, id: &TaskId, patch: &TaskPatch) -> TaskGatewayResult<Task> {
        let result = self
            .client
            .patch::<_, TaskRecord>(&format!("/tasks/{id}"), &TaskPatchBody::from(patch))
            .await;
        match result {
            Ok(record) => into_task(record),
            Err(err) if err.status() == Some(404) => Err(TaskGatewayError::NotFound(id.clone())),
            Err(err) => Err(TaskGatewayError::remote(err)),
        }
    }
}
