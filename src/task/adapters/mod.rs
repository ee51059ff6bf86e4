//! Adapter implementations of the task gateway port.

pub mod http;
pub mod memory;
