//! HTTP gateway backed by the remote order and catalog API.

mod gateway;
mod models;

pub use gateway::HttpOrderGateway;
