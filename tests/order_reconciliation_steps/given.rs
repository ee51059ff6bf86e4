//! Given steps for order reconciliation BDD scenarios.

use super::world::OrderWorld;
use opsboard::{
    access::Role,
    order::domain::{ArticleSelection, QuantityField},
    reference::ArticleId,
};
use rstest_bdd_macros::given;

fn add_line(world: &mut OrderWorld, quantity: u32, article: String) -> Result<(), eyre::Report> {
    let mut selection = ArticleSelection::new();
    selection.set_quantity(ArticleId::new(article), quantity);
    world.order.add_selection(&selection, Role::User)?;
    Ok(())
}

#[given(r#"an order with {quantity:u32} of article "{article}" ordered"#)]
fn order_with_line(
    world: &mut OrderWorld,
    quantity: u32,
    article: String,
) -> Result<(), eyre::Report> {
    add_line(world, quantity, article)
}

#[given(r#"an order line with {quantity:u32} of article "{article}" ordered"#)]
fn another_line(
    world: &mut OrderWorld,
    quantity: u32,
    article: String,
) -> Result<(), eyre::Report> {
    add_line(world, quantity, article)
}

#[given("line {index:usize} is validated at {quantity:i64}")]
fn line_validated(world: &mut OrderWorld, index: usize, quantity: i64) -> Result<(), eyre::Report> {
    world
        .order
        .adjust_quantity(index, quantity, QuantityField::Validated, Role::Admin)?;
    Ok(())
}
