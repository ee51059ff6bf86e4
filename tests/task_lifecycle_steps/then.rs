//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use opsboard::{
    access::Actor,
    reference::UserId,
    task::{
        domain::{Task, TaskDomainError, TaskStatus},
        services::TaskLifecycleError,
    },
};
use rstest_bdd_macros::then;

fn last_result(world: &TaskLifecycleWorld) -> Result<&Result<Task, TaskLifecycleError>, eyre::Report> {
    world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let id = world.task()?.id().clone();
    let stored = run_async(world.service.find_task(&id))?
        .ok_or_else(|| eyre::eyre!("task {id} missing from gateway"))?;

    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            stored.status().as_str()
        ));
    }
    Ok(())
}

#[then("no transition is offered")]
fn no_transition_offered(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.task()?.id().clone();
    let options = run_async(
        world
            .service
            .transition_options(&id, &Actor::admin(UserId::new("admin-1"))),
    )?;
    eyre::ensure!(
        options.transitions.is_empty(),
        "expected no transitions, got {:?}",
        options.transitions
    );
    Ok(())
}

#[then(r#"the transition fails as invalid from "{status}""#)]
fn transition_fails_as_invalid(
    world: &TaskLifecycleWorld,
    status: String,
) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    let matched = matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::InvalidTransition { from, .. }))
            if from.as_str() == status
    );
    eyre::ensure!(matched, "expected invalid transition from {status}, got {result:?}");
    Ok(())
}

#[then(r#"the transition fails for missing field "{field}""#)]
fn transition_fails_for_missing_field(
    world: &TaskLifecycleWorld,
    field: String,
) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    let matched = matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::MissingField { field: missing, .. }))
            if missing.as_str() == field
    );
    eyre::ensure!(matched, "expected missing {field}, got {result:?}");
    Ok(())
}

#[then("the transition fails because the actor is not the assignee")]
fn transition_fails_not_assignee(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    eyre::ensure!(
        matches!(
            result,
            Err(TaskLifecycleError::Domain(TaskDomainError::NotAssignee { .. }))
        ),
        "expected not-assignee rejection, got {result:?}"
    );
    Ok(())
}
