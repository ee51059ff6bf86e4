//! Step definitions for order reconciliation scenarios.

mod given;
mod then;
mod when;
