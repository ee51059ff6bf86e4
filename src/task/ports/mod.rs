//! Port contracts for the task lifecycle.
//!
//! Ports define the narrow calls the lifecycle service makes against the
//! remote API, independent of transport.

pub mod gateway;

pub use gateway::{TaskGateway, TaskGatewayError, TaskGatewayResult};
