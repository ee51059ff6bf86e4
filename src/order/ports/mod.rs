//! Port contracts for order reconciliation.

pub mod gateway;

pub use gateway::{OrderGateway, OrderGatewayError, OrderGatewayResult};
