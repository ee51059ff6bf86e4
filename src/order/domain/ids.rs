//! Identifier types for the order domain.

crate::reference::opaque_id!(
    /// Identifier of an order record, assigned by the remote API.
    OrderId
);
