//! Domain model for order quantity reconciliation.
//!
//! Each order line carries three quantities, each owned by one role:
//! the author orders (`quantite_cmd`), the back office validates
//! (`quantite_valid`), and the client or collaborator confirms
//! (`quantite_confr`, never above the validated quantity). All edits are
//! in-memory until the whole order is submitted.

mod catalog;
mod error;
mod ids;
mod line;
mod order;
mod quantity;

pub use catalog::{Article, ArticleSelection, CatalogQuery};
pub use error::OrderDomainError;
pub use ids::OrderId;
pub use line::{OrderLine, PersistedOrderLineData};
pub use order::{Order, PersistedOrderData, validate_for_submit};
pub use quantity::{QuantityField, adjusted_quantity, can_edit_field, can_manage_lines};
