//! Gateway port for order records and the article catalog.

use crate::order::domain::{Article, CatalogQuery, Order, OrderId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for order gateway operations.
pub type OrderGatewayResult<T> = Result<T, OrderGatewayError>;

/// Order persistence and catalog contract.
///
/// Writes always carry the full order, lines included, and return the
/// canonical record.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Finds an order by identifier.
    ///
    /// Returns `None` when the order does not exist.
    async fn find_by_id(&self, id: &OrderId) -> OrderGatewayResult<Option<Order>>;

    /// Creates an order and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`OrderGatewayError::RemoteFailure`] when the API rejects the
    /// order.
    async fn create(&self, order: &Order) -> OrderGatewayResult<Order>;

    /// Replaces an existing order and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`OrderGatewayError::NotFound`] when the order does not exist.
    async fn update(&self, id: &OrderId, order: &Order) -> OrderGatewayResult<Order>;

    /// Lists catalog articles passing `query`.
    async fn list_catalog(&self, query: &CatalogQuery) -> OrderGatewayResult<Vec<Article>>;
}

/// Errors returned by order gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum OrderGatewayError {
    /// The order was not found.
    #[error("order not found: {0}")]
    NotFound(OrderId),

    /// The remote call failed or returned a non-success status.
    #[error("remote failure: {0}")]
    RemoteFailure(Arc<dyn std::error::Error + Send + Sync>),
}

impl OrderGatewayError {
    /// Wraps a transport or API error.
    pub fn remote(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::RemoteFailure(Arc::new(err))
    }
}
