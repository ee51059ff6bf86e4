//! Quantity fields and the role capabilities that gate them.

use crate::access::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three quantities carried by an order line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityField {
    /// Requested quantity (`quantite_cmd`).
    #[serde(rename = "quantite_cmd")]
    Ordered,
    /// Quantity approved by the back office (`quantite_valid`).
    #[serde(rename = "quantite_valid")]
    Validated,
    /// Quantity confirmed by the client or collaborator (`quantite_confr`).
    #[serde(rename = "quantite_confr")]
    Confirmed,
}

impl QuantityField {
    /// Returns the field's wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ordered => "quantite_cmd",
            Self::Validated => "quantite_valid",
            Self::Confirmed => "quantite_confr",
        }
    }
}

impl fmt::Display for QuantityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns whether `role` may edit `field`.
///
/// Every role owns exactly one field.
#[must_use]
pub const fn can_edit_field(role: Role, field: QuantityField) -> bool {
    match field {
        QuantityField::Ordered => matches!(role, Role::User),
        QuantityField::Validated => role.is_privileged(),
        QuantityField::Confirmed => role.is_confirmer(),
    }
}

/// Returns whether `role` may add or remove order lines.
#[must_use]
pub const fn can_manage_lines(role: Role) -> bool {
    matches!(role, Role::Admin | Role::User)
}

/// Applies a stepper delta to a quantity, flooring the result at 1.
#[must_use]
pub fn adjusted_quantity(current: u32, delta: i64) -> u32 {
    let raw = i64::from(current).saturating_add(delta).max(1);
    u32::try_from(raw).unwrap_or(u32::MAX)
}
