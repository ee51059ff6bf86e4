//! In-memory gateway standing in for the order API in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::order::{
    domain::{Article, CatalogQuery, Order, OrderId},
    ports::{OrderGateway, OrderGatewayError, OrderGatewayResult},
};

/// Thread-safe in-memory order gateway with a fixed catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderGateway {
    state: Arc<RwLock<InMemoryOrderState>>,
}

#[derive(Debug, Default)]
struct InMemoryOrderState {
    orders: HashMap<OrderId, Order>,
    catalog: Vec<Article>,
    writes: usize,
}

impl InMemoryOrderGateway {
    /// Creates an empty gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway serving `catalog`.
    #[must_use]
    pub fn with_catalog(catalog: Vec<Article>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryOrderState {
                catalog,
                ..InMemoryOrderState::default()
            })),
        }
    }

    /// Returns the number of create and update calls received.
    ///
    /// # Errors
    ///
    /// Returns [`OrderGatewayError::RemoteFailure`] when the state lock is
    /// poisoned.
    pub fn write_count(&self) -> OrderGatewayResult<usize> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.writes)
    }
}

fn poisoned<T>(err: std::sync::PoisonError<T>) -> OrderGatewayError {
    OrderGatewayError::remote(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl OrderGateway for InMemoryOrderGateway {
    async fn find_by_id(&self, id: &OrderId) -> OrderGatewayResult<Option<Order>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.orders.get(id).cloned())
    }

    async fn create(&self, order: &Order) -> OrderGatewayResult<Order> {
        let mut state = self.state.write().map_err(poisoned)?;
        let id = OrderId::generate();
        let stored = order.clone().with_id(id.clone());
        state.orders.insert(id, stored.clone());
        state.writes += 1;
        Ok(stored)
    }

    async fn update(&self, id: &OrderId, order: &Order) -> OrderGatewayResult<Order> {
        let mut state = self.state.write().map_err(poisoned)?;
        if !state.orders.contains_key(id) {
            return Err(OrderGatewayError::NotFound(id.clone()));
        }
        let stored = order.clone().with_id(id.clone());
        state.orders.insert(id.clone(), stored.clone());
        state.writes += 1;
        Ok(stored)
    }

    async fn list_catalog(&self, query: &CatalogQuery) -> OrderGatewayResult<Vec<Article>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(query.filter(&state.catalog).into_iter().cloned().collect())
    }
}
