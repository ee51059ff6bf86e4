//! Caller identity passed explicitly into every workflow operation.
//!
//! Services never read the current user from ambient state; callers build an
//! [`Actor`] from their own session and hand it to each operation.

mod actor;
mod role;

pub use actor::Actor;
pub use role::{ParseRoleError, Role};
