//! Application services for order reconciliation.

mod reconciliation;

pub use reconciliation::{
    OrderReconciliationError, OrderReconciliationResult, OrderReconciliationService,
};
