//! In-memory order gateway.

mod order;

pub use order::InMemoryOrderGateway;
