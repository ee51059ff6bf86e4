//! Adapter implementations of the order gateway port.

pub mod http;
pub mod memory;
