//! Order quantity reconciliation.
//!
//! Orders are edited line by line in memory: authors pick catalog articles
//! and set ordered quantities, the back office validates them, and the
//! client or collaborator confirms within the validated amount. The
//! complete order is checked for the submitting role and persisted in a
//! single call.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
