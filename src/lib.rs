//! Opsboard: field-operations back-office core.
//!
//! This crate holds the business rules of an operations back office:
//! the lifecycle of field tasks from capture to closure, and the
//! reconciliation of ordered, validated and confirmed quantities on
//! material orders.
//!
//! # Architecture
//!
//! Opsboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (REST API, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle state machine and transition guards
//! - [`order`]: Order line quantity reconciliation and catalog selection
//! - [`access`]: Roles and the acting user
//! - [`reference`]: Identifiers of records owned by other services
//! - [`api`]: REST client configuration and transport

pub mod access;
pub mod api;
pub mod order;
pub mod reference;
pub mod task;
