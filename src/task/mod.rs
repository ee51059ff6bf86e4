//! Task lifecycle controller.
//!
//! Tasks are created in `SAISIE` and move through assignment, acceptance,
//! planning and reporting to closure, or are cancelled on the way. Every
//! status change is an explicit operation that validates its precondition
//! and required fields before a single partial update is sent to the API.
//! The module follows hexagonal architecture:
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
