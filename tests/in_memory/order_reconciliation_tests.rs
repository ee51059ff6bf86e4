//! In-memory integration tests for order reconciliation.

use std::sync::Arc;

use mockable::DefaultClock;
use opsboard::{
    access::{Actor, Role},
    order::{
        adapters::memory::InMemoryOrderGateway,
        domain::{Article, ArticleSelection, CatalogQuery, OrderDomainError, QuantityField},
        services::{OrderReconciliationError, OrderReconciliationService},
    },
    reference::{ArticleId, CategoryId, ClientId, CollaboratorId, UserId},
};
use rstest::{fixture, rstest};

type TestService = OrderReconciliationService<InMemoryOrderGateway, DefaultClock>;

struct Harness {
    gateway: InMemoryOrderGateway,
    service: TestService,
}

#[fixture]
fn harness() -> Harness {
    let gateway = InMemoryOrderGateway::with_catalog(vec![
        Article::new(ArticleId::new("art-1"), "CBL-25", "Copper cable 2.5mm")
            .with_category(CategoryId::new("electrical")),
        Article::new(ArticleId::new("art-2"), "SCK-01", "Wall socket")
            .with_category(CategoryId::new("electrical")),
        Article::new(ArticleId::new("art-3"), "HLM-01", "Safety helmet")
            .with_category(CategoryId::new("safety")),
    ]);
    let service =
        OrderReconciliationService::new(Arc::new(gateway.clone()), Arc::new(DefaultClock));
    Harness { gateway, service }
}

fn actor(role: Role) -> Actor {
    Actor::new(UserId::new("user-1"), role)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn catalog_selection_becomes_order_lines(harness: Harness) -> Result<(), eyre::Report> {
    let Harness { gateway, service } = harness;
    let electrical = service
        .browse_catalog(&CatalogQuery::new().with_category(CategoryId::new("electrical")))
        .await?;
    eyre::ensure!(electrical.len() == 2, "two electrical articles");

    let mut selection = ArticleSelection::new();
    for article in &electrical {
        selection.select(article.id().clone());
    }
    selection.adjust(&ArticleId::new("art-1"), 2);

    let mut order = service.new_order(ClientId::new("client-1"), CollaboratorId::new("collab-1"));
    order.add_selection(&selection, Role::User)?;
    order.add_selection(&selection, Role::User)?;
    let stored = service.submit(&order, &actor(Role::User)).await?;

    let ordered: Vec<u32> = stored.lines().iter().map(|line| line.ordered()).collect();
    eyre::ensure!(ordered == vec![6, 2], "merged quantities, got {ordered:?}");
    eyre::ensure!(gateway.write_count()? == 1, "one write");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unvalidated_line_blocks_validator_submit(harness: Harness) -> Result<(), eyre::Report> {
    let Harness { gateway, service } = harness;
    let mut selection = ArticleSelection::new();
    selection.select(ArticleId::new("art-1"));
    selection.select(ArticleId::new("art-3"));
    let mut order = service.new_order(ClientId::new("client-1"), CollaboratorId::new("collab-1"));
    order.add_selection(&selection, Role::User)?;
    let mut stored = service.submit(&order, &actor(Role::User)).await?;

    stored.adjust_quantity(0, 1, QuantityField::Validated, Role::Admin)?;
    let result = service.submit(&stored, &actor(Role::Admin)).await;

    eyre::ensure!(
        matches!(
            &result,
            Err(OrderReconciliationError::Domain(OrderDomainError::IncompleteValidation { lines }))
                if lines == &[1]
        ),
        "expected line 1 reported, got {result:?}"
    );
    eyre::ensure!(gateway.write_count()? == 1, "rejected submit wrote nothing");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn confirmation_is_capped_by_validation(harness: Harness) -> Result<(), eyre::Report> {
    let Harness { service, .. } = harness;
    let mut selection = ArticleSelection::new();
    selection.set_quantity(ArticleId::new("art-2"), 8);
    let mut order = service.new_order(ClientId::new("client-1"), CollaboratorId::new("collab-1"));
    order.add_selection(&selection, Role::Admin)?;
    order.adjust_quantity(0, 5, QuantityField::Validated, Role::Admin)?;
    let mut stored = service.submit(&order, &actor(Role::Admin)).await?;

    for _ in 0..5 {
        stored.adjust_quantity(0, 1, QuantityField::Confirmed, Role::Collaborator)?;
    }
    let overflow = stored.adjust_quantity(0, 1, QuantityField::Confirmed, Role::Collaborator);
    let confirmed = service.submit(&stored, &actor(Role::Collaborator)).await?;

    eyre::ensure!(
        matches!(
            overflow,
            Err(OrderDomainError::QuantityExceedsValidated { confirmed: 6, validated: 5, .. })
        ),
        "expected overflow rejection, got {overflow:?}"
    );
    let line = confirmed
        .lines()
        .first()
        .ok_or_else(|| eyre::eyre!("line missing"))?;
    eyre::ensure!(line.confirmed() == 5, "confirmed capped at 5");
    Ok(())
}
