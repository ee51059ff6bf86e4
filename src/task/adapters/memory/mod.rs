//! In-memory task gateway.

mod task;

pub use task::InMemoryTaskGateway;
