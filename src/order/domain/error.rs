//! Error types for order line edits and submission.

use super::QuantityField;
use crate::{access::Role, reference::StatusCode};
use thiserror::Error;

/// Errors returned while editing or submitting an order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderDomainError {
    /// The role may not edit this quantity field.
    #[error("role {role} may not edit {field}")]
    FieldNotEditable {
        /// Role attempting the edit.
        role: Role,
        /// Field it attempted to edit.
        field: QuantityField,
    },

    /// The role may not add or remove order lines.
    #[error("role {0} may not add or remove order lines")]
    LinesNotManageable(Role),

    /// The order's status no longer allows adding or removing lines.
    #[error("order in status {0} no longer accepts line changes")]
    OrderLocked(StatusCode),

    /// No line exists at the given index.
    #[error("order has no line at index {0}")]
    LineNotFound(usize),

    /// The confirmed quantity would exceed the validated quantity.
    #[error("line {line}: confirmed quantity {confirmed} exceeds validated quantity {validated}")]
    QuantityExceedsValidated {
        /// Index of the offending line.
        line: usize,
        /// Confirmed quantity that was requested or found.
        confirmed: u32,
        /// Validated quantity bounding it.
        validated: u32,
    },

    /// Some lines have no validated quantity.
    #[error("lines {lines:?} have no validated quantity")]
    IncompleteValidation {
        /// Indices of the offending lines.
        lines: Vec<usize>,
    },

    /// Some lines have no confirmed quantity.
    #[error("lines {lines:?} have no confirmed quantity")]
    IncompleteConfirmation {
        /// Indices of the offending lines.
        lines: Vec<usize>,
    },

    /// The order has no lines.
    #[error("order has no lines")]
    EmptyOrder,
}
