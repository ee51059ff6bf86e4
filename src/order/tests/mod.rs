//! Unit tests for order quantity reconciliation.


use crate::{
    order::domain::{Order, OrderId, OrderLine, PersistedOrderData, PersistedOrderLineData},
    reference::{ArticleId, ClientId, CollaboratorId, StatusCode},
};
use chrono::NaiveDate;

/// Builds a line from `(article, ordered, validated, confirmed)`.
pub(super) fn line(article: &str, ordered: u32, validated: u32, confirmed: u32) -> OrderLine {
    OrderLine::from_persisted(PersistedOrderLineData {
        article: ArticleId::new(article),
        ordered,
        validated,
        confirmed,
        status: StatusCode::pending(),
        notes: None,
    })
}

/// Builds a persisted order snapshot holding `lines`.
pub(super) fn order_with(lines: Vec<OrderLine>) -> Order {
    order_in_status(lines, None)
}

/// Builds a persisted order snapshot in `status` holding `lines`.
pub(super) fn order_in_status(lines: Vec<OrderLine>, status: Option<&str>) -> Order {
    Order::from_persisted(PersistedOrderData {
        id: OrderId::new("order-1"),
        collaborator: CollaboratorId::new("collab-1"),
        client: ClientId::new("client-1"),
        order_date: NaiveDate::from_ymd_opt(2024, 3, 4).expect("valid date"),
        delivery_date: None,
        notes: None,
        status: status.map(StatusCode::new),
        lines,
    })
}
