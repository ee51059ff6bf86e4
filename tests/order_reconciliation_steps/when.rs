//! When steps for order reconciliation BDD scenarios.

use super::world::{OrderWorld, run_async};
use opsboard::{
    access::{Actor, Role},
    order::domain::{ArticleSelection, QuantityField},
    reference::{ArticleId, UserId},
};
use rstest_bdd_macros::when;

#[when(r#"the author selects {quantity:u32} of article "{article}" from the catalog"#)]
fn author_selects(
    world: &mut OrderWorld,
    quantity: u32,
    article: String,
) -> Result<(), eyre::Report> {
    let mut selection = ArticleSelection::new();
    selection.set_quantity(ArticleId::new(article), quantity);
    world.order.add_selection(&selection, Role::User)?;
    Ok(())
}

#[when("the author steps line {index:usize} by {delta:i64}")]
fn author_steps(world: &mut OrderWorld, index: usize, delta: i64) {
    let result = world
        .order
        .adjust_quantity(index, delta, QuantityField::Ordered, Role::User);
    world.last_edit = Some(result);
}

#[when("the client steps the confirmation of line {index:usize} by {delta:i64}")]
fn client_steps_confirmation(world: &mut OrderWorld, index: usize, delta: i64) {
    let result = world
        .order
        .adjust_quantity(index, delta, QuantityField::Confirmed, Role::Client);
    world.last_edit = Some(result);
}

#[when("the admin submits the order")]
fn admin_submits(world: &mut OrderWorld) {
    let actor = Actor::admin(UserId::new("admin-1"));
    let result = run_async(world.service.submit(&world.order, &actor));
    world.last_submit = Some(result);
}
