//! Access to the remote dashboard API.
//!
//! [`ApiConfig`] describes where the API lives and how to authenticate;
//! [`ApiClient`] performs JSON requests against it. The task and order HTTP
//! adapters are built on top of this client.

mod client;
mod config;
mod error;
pub(crate) mod wire;

pub use client::ApiClient;
pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
