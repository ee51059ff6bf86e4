//! [`OrderGateway`] over the remote REST API.

use super::models::{ArticleRecord, OrderBody, OrderRecord};
use crate::{
    api::ApiClient,
    order::{
        domain::{Article, CatalogQuery, Order, OrderId},
        ports::{OrderGateway, OrderGatewayError, OrderGatewayResult},
    },
};
use async_trait::async_trait;

/// Order gateway calling `/orders` and `/articles` endpoints.
#[derive(Debug, Clone)]
pub struct HttpOrderGateway {
    client: ApiClient,
}

impl HttpOrderGateway {
    /// Creates a gateway using `client`.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    async fn find_by_id(&self, id: &OrderId) -> OrderGatewayResult<Option<Order>> {
        let record: Option<OrderRecord> = self
            .client
            .get_optional(&format!("/orders/{id}"))
            .await
            .map_err(OrderGatewayError::remote)?;
        Ok(record.map(Order::from))
    }

    async fn create(&self, order: &Order) -> OrderGatewayResult<Order> {
        let record: OrderRecord = self
            .client
            .post("/orders", &OrderBody::from(order))
            .await
            .map_err(OrderGatewayError::remote)?;
        Ok(Order::from(record))
    }

    async fn update(&self, id: &OrderId, order: &Order) -> OrderGatewayResult<Order> {
        let result = self
            .client
            .patch::<_, OrderRecord>(&format!("/orders/{id}"), &OrderBody::from(order))
            .await;
        match result {
            Ok(record) => Ok(Order::from(record)),
            Err(err) if err.status() == Some(404) => Err(OrderGatewayError::NotFound(id.clone())),
            Err(err) => Err(OrderGatewayError::remote(err)),
        }
    }

    async fn list_catalog(&self, query: &CatalogQuery) -> OrderGatewayResult<Vec<Article>> {
        let mut params = Vec::new();
        if let Some(search) = query.search() {
            params.push(("search", search));
        }
        if let Some(category) = query.category() {
            params.push(("categorie", category.as_str()));
        }

        let records: Vec<ArticleRecord> = self
            .client
            .get("/articles", &params)
            .await
            .map_err(OrderGatewayError::remote)?;
        // Filters are re-applied locally; the API ignores parameters it does not know.
        Ok(records
            .into_iter()
            .map(Article::from)
            .filter(|article| query.matches(article))
            .collect())
    }
}
