//! Order line value type.

use super::QuantityField;
use crate::reference::{ArticleId, StatusCode};
use serde::{Deserialize, Serialize};

/// Parameter object for reconstructing a line returned by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedOrderLineData {
    /// Ordered article.
    pub article: ArticleId,
    /// Requested quantity.
    pub ordered: u32,
    /// Validated quantity, 0 when not yet validated.
    pub validated: u32,
    /// Confirmed quantity, 0 when not yet confirmed.
    pub confirmed: u32,
    /// Line status.
    pub status: StatusCode,
    /// Free-text notes.
    pub notes: Option<String>,
}

/// One article-quantity pairing within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    article: ArticleId,
    ordered: u32,
    validated: u32,
    confirmed: u32,
    status: StatusCode,
    notes: Option<String>,
}

impl OrderLine {
    /// Creates a pending line for `article` with nothing validated or
    /// confirmed yet.
    #[must_use]
    pub fn new(article: ArticleId, ordered: u32) -> Self {
        Self {
            article,
            ordered,
            validated: 0,
            confirmed: 0,
            status: StatusCode::pending(),
            notes: None,
        }
    }

    /// Reconstructs a line from its persisted representation.
    #[must_use]
    pub fn from_persisted(data: PersistedOrderLineData) -> Self {
        Self {
            article: data.article,
            ordered: data.ordered,
            validated: data.validated,
            confirmed: data.confirmed,
            status: data.status,
            notes: data.notes,
        }
    }

    /// Returns the ordered article.
    #[must_use]
    pub const fn article(&self) -> &ArticleId {
        &self.article
    }

    /// Returns the requested quantity.
    #[must_use]
    pub const fn ordered(&self) -> u32 {
        self.ordered
    }

    /// Returns the validated quantity.
    #[must_use]
    pub const fn validated(&self) -> u32 {
        self.validated
    }

    /// Returns the confirmed quantity.
    #[must_use]
    pub const fn confirmed(&self) -> u32 {
        self.confirmed
    }

    /// Returns the line status.
    #[must_use]
    pub const fn status(&self) -> &StatusCode {
        &self.status
    }

    /// Returns the notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the value of `field`.
    #[must_use]
    pub const fn quantity(&self, field: QuantityField) -> u32 {
        match field {
            QuantityField::Ordered => self.ordered,
            QuantityField::Validated => self.validated,
            QuantityField::Confirmed => self.confirmed,
        }
    }

    pub(super) const fn set_quantity(&mut self, field: QuantityField, value: u32) {
        match field {
            QuantityField::Ordered => self.ordered = value,
            QuantityField::Validated => self.validated = value,
            QuantityField::Confirmed => self.confirmed = value,
        }
    }

    pub(super) const fn add_ordered(&mut self, quantity: u32) {
        self.ordered = self.ordered.saturating_add(quantity);
    }
}
