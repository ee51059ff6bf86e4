//! HTTP gateway backed by the remote task API.

mod gateway;
mod models;

pub use gateway::HttpTaskGateway;
