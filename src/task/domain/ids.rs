//! Identifier types for the task domain.

crate::reference::opaque_id!(
    /// Identifier of a task record, assigned by the remote API.
    TaskId
);
