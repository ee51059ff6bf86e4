//! In-memory integration tests for task lifecycle operations.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::DefaultClock;
use opsboard::{
    access::{Actor, Role},
    reference::{CollaboratorId, UserId},
    task::{
        adapters::memory::InMemoryTaskGateway,
        domain::{Task, TaskCommand, TaskDomainError, TaskField, TaskStatus, TaskTransition},
        services::{CreateTaskRequest, TaskLifecycleError, TaskLifecycleService},
    },
};
use rstest::{fixture, rstest};

type TestService = TaskLifecycleService<InMemoryTaskGateway, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskLifecycleService::new(Arc::new(InMemoryTaskGateway::new()), Arc::new(DefaultClock))
}

fn admin() -> Actor {
    Actor::admin(UserId::new("admin-1"))
}

fn assignee() -> Actor {
    Actor::collaborator(UserId::new("user-9"), CollaboratorId::new("collab-9"))
}

fn visit_date() -> Result<NaiveDate, eyre::Report> {
    NaiveDate::from_ymd_opt(2025, 6, 2).ok_or_else(|| eyre::eyre!("invalid visit date"))
}

async fn created(service: &TestService) -> Result<Task, eyre::Report> {
    let request = CreateTaskRequest::new("Replace meter", "type-1", "client-1", "project-1")
        .with_address("3 rue des Lilas");
    Ok(service.create_task(request).await?)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_walks_the_happy_path(service: TestService) -> Result<(), eyre::Report> {
    let task = created(&service).await?;
    let id = task.id().clone();

    service
        .assign(&id, CollaboratorId::new("collab-9"), &admin())
        .await?;
    service.accept(&id, &assignee()).await?;
    service
        .plan(&id, visit_date()?, "3 rue des Lilas", &assignee())
        .await?;
    service.report(&id, "Meter replaced", &assignee()).await?;
    let closed = service.complete(&id, "Checked on site", &admin()).await?;

    eyre::ensure!(closed.status() == TaskStatus::Cloturee, "task should be closed");
    eyre::ensure!(closed.execution_date() == Some(visit_date()?), "date kept");
    eyre::ensure!(closed.report() == Some("Checked on site"), "report replaced");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assign_with_date_schedules_directly(service: TestService) -> Result<(), eyre::Report> {
    let task = created(&service).await?;
    let command = TaskCommand::assign_on(CollaboratorId::new("collab-9"), visit_date()?);

    let assigned = service.transition(task.id(), &command, &admin()).await?;

    eyre::ensure!(assigned.status() == TaskStatus::Affectee, "task should be assigned");
    eyre::ensure!(
        assigned.collaborator().map(CollaboratorId::as_str) == Some("collab-9"),
        "collaborator recorded"
    );
    eyre::ensure!(assigned.execution_date() == Some(visit_date()?), "date recorded");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn report_requires_text(service: TestService) -> Result<(), eyre::Report> {
    let task = created(&service).await?;
    let id = task.id().clone();
    service
        .assign(&id, CollaboratorId::new("collab-9"), &admin())
        .await?;
    service.accept(&id, &admin()).await?;
    service
        .plan(&id, visit_date()?, "3 rue des Lilas", &admin())
        .await?;

    let result = service.report(&id, "   ", &assignee()).await;

    eyre::ensure!(
        matches!(
            result,
            Err(TaskLifecycleError::Domain(TaskDomainError::MissingField {
                transition: TaskTransition::Report,
                field: TaskField::Report,
            }))
        ),
        "expected missing report, got {result:?}"
    );
    let unchanged = service
        .find_task(&id)
        .await?
        .ok_or_else(|| eyre::eyre!("task vanished"))?;
    eyre::ensure!(unchanged.status() == TaskStatus::Planifiee, "status unchanged");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn other_collaborator_cannot_accept(service: TestService) -> Result<(), eyre::Report> {
    let task = created(&service).await?;
    let id = task.id().clone();
    service
        .assign(&id, CollaboratorId::new("collab-9"), &admin())
        .await?;
    let stranger = Actor::collaborator(UserId::new("user-2"), CollaboratorId::new("collab-2"));

    let options = service.transition_options(&id, &stranger).await?;
    let result = service.accept(&id, &stranger).await;

    eyre::ensure!(!options.allows(TaskTransition::Accept), "accept hidden");
    eyre::ensure!(options.allows(TaskTransition::Cancel), "cancel offered");
    eyre::ensure!(
        matches!(
            result,
            Err(TaskLifecycleError::Domain(TaskDomainError::NotAssignee { .. }))
        ),
        "expected not-assignee rejection, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[case(Role::Admin)]
#[case(Role::User)]
#[tokio::test(flavor = "multi_thread")]
async fn cancelled_task_is_terminal(
    service: TestService,
    #[case] role: Role,
) -> Result<(), eyre::Report> {
    let task = created(&service).await?;
    let actor = Actor::new(UserId::new("user-1"), role);

    let cancelled = service.cancel(task.id(), "Client withdrew", &actor).await?;
    let again = service.cancel(task.id(), "Twice", &actor).await;
    let options = service.transition_options(task.id(), &actor).await?;

    eyre::ensure!(cancelled.status() == TaskStatus::Annulee, "task cancelled");
    eyre::ensure!(cancelled.report() == Some("Client withdrew"), "reason stored");
    eyre::ensure!(
        matches!(
            again,
            Err(TaskLifecycleError::Domain(TaskDomainError::InvalidTransition {
                from: TaskStatus::Annulee,
                ..
            }))
        ),
        "expected terminal rejection, got {again:?}"
    );
    eyre::ensure!(options.transitions.is_empty(), "no transitions out of ANNULEE");
    Ok(())
}
