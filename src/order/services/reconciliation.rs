//! Service layer for drafting, loading and submitting orders.

use crate::{
    access::Actor,
    order::{
        domain::{Article, CatalogQuery, Order, OrderDomainError, OrderId},
        ports::{OrderGateway, OrderGatewayError},
    },
    reference::{ClientId, CollaboratorId},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for order reconciliation.
#[derive(Debug, Error)]
pub enum OrderReconciliationError {
    /// Domain validation failed; nothing was sent to the gateway.
    #[error(transparent)]
    Domain(#[from] OrderDomainError),
    /// Gateway operation failed.
    #[error(transparent)]
    Gateway(OrderGatewayError),
    /// The order does not exist.
    #[error("order not found: {0}")]
    NotFound(OrderId),
}

impl From<OrderGatewayError> for OrderReconciliationError {
    fn from(err: OrderGatewayError) -> Self {
        match err {
            OrderGatewayError::NotFound(id) => Self::NotFound(id),
            other @ OrderGatewayError::RemoteFailure(_) => Self::Gateway(other),
        }
    }
}

/// Result type for order reconciliation operations.
pub type OrderReconciliationResult<T> = Result<T, OrderReconciliationError>;

/// Order reconciliation service.
///
/// Line edits happen on the caller's [`Order`] value; this service handles
/// the round-trips: loading, browsing the catalog, and submitting the whole
/// order in one call.
#[derive(Clone)]
pub struct OrderReconciliationService<G, C>
where
    G: OrderGateway,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    clock: Arc<C>,
}

impl<G, C> OrderReconciliationService<G, C>
where
    G: OrderGateway,
    C: Clock + Send + Sync,
{
    /// Creates a new order reconciliation service.
    #[must_use]
    pub const fn new(gateway: Arc<G>, clock: Arc<C>) -> Self {
        Self { gateway, clock }
    }

    /// Starts an unsubmitted order dated today.
    #[must_use]
    pub fn new_order(&self, client: ClientId, collaborator: CollaboratorId) -> Order {
        Order::draft(client, collaborator, &*self.clock)
    }

    /// Retrieves an order by identifier.
    ///
    /// Returns `Ok(None)` when the order does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`OrderReconciliationError::Gateway`] when the lookup fails.
    pub async fn find_order(&self, id: &OrderId) -> OrderReconciliationResult<Option<Order>> {
        Ok(self.gateway.find_by_id(id).await?)
    }

    /// Lists catalog articles passing `query`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderReconciliationError::Gateway`] when the listing fails.
    pub async fn browse_catalog(
        &self,
        query: &CatalogQuery,
    ) -> OrderReconciliationResult<Vec<Article>> {
        Ok(self.gateway.list_catalog(query).await?)
    }

    /// Validates `order` for the actor's role and persists it in one call.
    ///
    /// Orders without an identifier are created, others replaced. The
    /// caller's value is never modified; the returned order is the
    /// gateway's canonical record.
    ///
    /// # Errors
    ///
    /// Returns [`OrderReconciliationError::Domain`] when the order is
    /// incomplete for the role, [`OrderReconciliationError::NotFound`] when
    /// the order to update no longer exists, or
    /// [`OrderReconciliationError::Gateway`] when the remote call fails.
    #[tracing::instrument(
        skip(self, order, actor),
        fields(order_id = ?order.id(), lines = order.lines().len(), role = %actor.role())
    )]
    pub async fn submit(&self, order: &Order, actor: &Actor) -> OrderReconciliationResult<Order> {
        order.validate_for_submit(actor.role()).inspect_err(|err| {
            tracing::warn!(%err, "order submission rejected");
        })?;

        let stored = match order.id() {
            Some(id) => self.gateway.update(id, order).await,
            None => self.gateway.create(order).await,
        }
        .inspect_err(|err| {
            tracing::warn!(%err, "order submission failed");
        })?;
        tracing::info!(order_id = ?stored.id(), "order submitted");
        Ok(stored)
    }
}
