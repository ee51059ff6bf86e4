//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use chrono::NaiveDate;
use eyre::WrapErr;
use opsboard::{
    access::Actor,
    reference::{CollaboratorId, UserId},
};
use rstest_bdd_macros::when;

fn admin() -> Actor {
    Actor::admin(UserId::new("admin-1"))
}

#[when(r#"an admin assigns the task to collaborator "{collaborator}""#)]
fn admin_assigns(
    world: &mut TaskLifecycleWorld,
    collaborator: String,
) -> Result<(), eyre::Report> {
    let id = world.task()?.id().clone();
    let result = run_async(
        world
            .service
            .assign(&id, CollaboratorId::new(collaborator), &admin()),
    );
    world.record(result);
    Ok(())
}

#[when(r#"the collaborator "{collaborator}" accepts the task"#)]
fn collaborator_accepts(
    world: &mut TaskLifecycleWorld,
    collaborator: String,
) -> Result<(), eyre::Report> {
    let id = world.task()?.id().clone();
    let actor = Actor::collaborator(
        UserId::new(format!("user-{collaborator}")),
        CollaboratorId::new(collaborator),
    );
    let result = run_async(world.service.accept(&id, &actor));
    world.record(result);
    Ok(())
}

#[when(r#"the task is planned for "{date}" at "{address}""#)]
fn task_planned(
    world: &mut TaskLifecycleWorld,
    date: String,
    address: String,
) -> Result<(), eyre::Report> {
    let id = world.task()?.id().clone();
    let execution_date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .wrap_err("parse execution date in scenario")?;
    let result = run_async(world.service.plan(&id, execution_date, address, &admin()));
    world.record(result);
    Ok(())
}

#[when(r#"the report "{text}" is filed"#)]
fn report_filed(world: &mut TaskLifecycleWorld, text: String) -> Result<(), eyre::Report> {
    let id = world.task()?.id().clone();
    let result = run_async(world.service.report(&id, text, &admin()));
    world.record(result);
    Ok(())
}

#[when(r#"the task is closed with "{text}""#)]
fn task_closed(world: &mut TaskLifecycleWorld, text: String) -> Result<(), eyre::Report> {
    let id = world.task()?.id().clone();
    let result = run_async(world.service.complete(&id, text, &admin()));
    world.record(result);
    Ok(())
}

#[when(r#"the task is cancelled because "{reason}""#)]
fn task_cancelled(world: &mut TaskLifecycleWorld, reason: String) -> Result<(), eyre::Report> {
    let id = world.task()?.id().clone();
    let result = run_async(world.service.cancel(&id, reason, &admin()));
    world.record(result);
    Ok(())
}
