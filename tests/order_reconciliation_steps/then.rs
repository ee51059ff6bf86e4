//! Then steps for order reconciliation BDD scenarios.

use super::world::OrderWorld;
use opsboard::order::{domain::OrderDomainError, services::OrderReconciliationError};
use rstest_bdd_macros::then;

#[then("the order has {count:usize} line")]
fn order_has_lines(world: &OrderWorld, count: usize) -> Result<(), eyre::Report> {
    let found = world.order.lines().len();
    eyre::ensure!(found == count, "expected {count} lines, found {found}");
    Ok(())
}

#[then("line {index:usize} has {quantity:u32} ordered")]
fn line_has_ordered(world: &OrderWorld, index: usize, quantity: u32) -> Result<(), eyre::Report> {
    let line = world
        .order
        .lines()
        .get(index)
        .ok_or_else(|| eyre::eyre!("no line at {index}"))?;
    eyre::ensure!(
        line.ordered() == quantity,
        "expected {quantity} ordered, found {}",
        line.ordered()
    );
    Ok(())
}

#[then("line {index:usize} has {quantity:u32} confirmed")]
fn line_has_confirmed(
    world: &OrderWorld,
    index: usize,
    quantity: u32,
) -> Result<(), eyre::Report> {
    let line = world
        .order
        .lines()
        .get(index)
        .ok_or_else(|| eyre::eyre!("no line at {index}"))?;
    eyre::ensure!(
        line.confirmed() == quantity,
        "expected {quantity} confirmed, found {}",
        line.confirmed()
    );
    Ok(())
}

#[then("the edit fails because {confirmed:u32} exceeds {validated:u32}")]
fn edit_fails_exceeding(
    world: &OrderWorld,
    confirmed: u32,
    validated: u32,
) -> Result<(), eyre::Report> {
    let result = world
        .last_edit
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing edit result"))?;
    let matched = matches!(
        result,
        Err(OrderDomainError::QuantityExceedsValidated {
            confirmed: found_confirmed,
            validated: found_validated,
            ..
        }) if *found_confirmed == confirmed && *found_validated == validated
    );
    eyre::ensure!(matched, "expected overflow rejection, got {result:?}");
    Ok(())
}

#[then("submission fails listing unvalidated line {index:usize}")]
fn submission_fails_listing(world: &OrderWorld, index: usize) -> Result<(), eyre::Report> {
    let result = world
        .last_submit
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing submit result"))?;
    let matched = matches!(
        result,
        Err(OrderReconciliationError::Domain(OrderDomainError::IncompleteValidation { lines }))
            if lines == &vec![index]
    );
    eyre::ensure!(matched, "expected line {index} reported, got {result:?}");
    Ok(())
}

#[then("nothing was written")]
fn nothing_written(world: &OrderWorld) -> Result<(), eyre::Report> {
    let writes = world.gateway.write_count()?;
    eyre::ensure!(writes == 0, "expected no writes, found {writes}");
    Ok(())
}
