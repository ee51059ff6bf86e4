//! Order aggregate and its role-gated editing operations.

use super::{
    ArticleSelection, OrderDomainError, OrderId, OrderLine, QuantityField, adjusted_quantity,
    can_edit_field, can_manage_lines,
};
use crate::{
    access::Role,
    reference::{ClientId, CollaboratorId, StatusCode},
};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Parameter object for reconstructing an order returned by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedOrderData {
    /// Order identifier.
    pub id: OrderId,
    /// Collaborator the order is for.
    pub collaborator: CollaboratorId,
    /// Client the order is for.
    pub client: ClientId,
    /// Order date.
    pub order_date: NaiveDate,
    /// Requested delivery date.
    pub delivery_date: Option<NaiveDate>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Order status.
    pub status: Option<StatusCode>,
    /// Order lines.
    pub lines: Vec<OrderLine>,
}

/// Order aggregate root.
///
/// Orders without an identifier have not been submitted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: Option<OrderId>,
    collaborator: CollaboratorId,
    client: ClientId,
    order_date: NaiveDate,
    delivery_date: Option<NaiveDate>,
    notes: Option<String>,
    status: Option<StatusCode>,
    lines: Vec<OrderLine>,
}

impl Order {
    /// Creates an unsubmitted order dated today.
    #[must_use]
    pub fn draft(client: ClientId, collaborator: CollaboratorId, clock: &impl Clock) -> Self {
        Self {
            id: None,
            collaborator,
            client,
            order_date: clock.utc().date_naive(),
            delivery_date: None,
            notes: None,
            status: None,
            lines: Vec::new(),
        }
    }

    /// Reconstructs an order from its persisted representation.
    #[must_use]
    pub fn from_persisted(data: PersistedOrderData) -> Self {
        Self {
            id: Some(data.id),
            collaborator: data.collaborator,
            client: data.client,
            order_date: data.order_date,
            delivery_date: data.delivery_date,
            notes: data.notes,
            status: data.status,
            lines: data.lines,
        }
    }

    /// Returns a copy carrying the identifier the API assigned.
    #[must_use]
    pub fn with_id(mut self, id: OrderId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the requested delivery date.
    #[must_use]
    pub const fn with_delivery_date(mut self, delivery_date: NaiveDate) -> Self {
        self.delivery_date = Some(delivery_date);
        self
    }

    /// Sets free-text notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Returns the identifier, if the order has been persisted.
    #[must_use]
    pub const fn id(&self) -> Option<&OrderId> {
        self.id.as_ref()
    }

    /// Returns the collaborator.
    #[must_use]
    pub const fn collaborator(&self) -> &CollaboratorId {
        &self.collaborator
    }

    /// Returns the client.
    #[must_use]
    pub const fn client(&self) -> &ClientId {
        &self.client
    }

    /// Returns the order date.
    #[must_use]
    pub const fn order_date(&self) -> NaiveDate {
        self.order_date
    }

    /// Returns the requested delivery date, if any.
    #[must_use]
    pub const fn delivery_date(&self) -> Option<NaiveDate> {
        self.delivery_date
    }

    /// Returns the notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the order status, if any.
    #[must_use]
    pub const fn status(&self) -> Option<&StatusCode> {
        self.status.as_ref()
    }

    /// Returns the order lines.
    #[must_use]
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Returns whether lines may still be added or removed.
    ///
    /// Unsubmitted orders are always editable; submitted ones only while
    /// their status is absent or pending.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.id.is_none() || self.status.as_ref().is_none_or(StatusCode::is_pending)
    }

    /// Steps one quantity of one line by `delta` on behalf of `role`.
    ///
    /// The new value is `max(1, current + delta)`. On error the order is
    /// left unchanged.
    ///
    /// # Errors
    ///
    /// - [`OrderDomainError::FieldNotEditable`] when `role` does not own
    ///   `field`.
    /// - [`OrderDomainError::LineNotFound`] when `line_index` is out of
    ///   range.
    /// - [`OrderDomainError::QuantityExceedsValidated`] when the confirmed
    ///   quantity would end up above the validated one.
    pub fn adjust_quantity(
        &mut self,
        line_index: usize,
        delta: i64,
        field: QuantityField,
        role: Role,
    ) -> Result<u32, OrderDomainError> {
        if !can_edit_field(role, field) {
            return Err(OrderDomainError::FieldNotEditable { role, field });
        }
        let line = self
            .lines
            .get_mut(line_index)
            .ok_or(OrderDomainError::LineNotFound(line_index))?;

        let value = adjusted_quantity(line.quantity(field), delta);
        let (confirmed, validated) = match field {
            QuantityField::Confirmed => (value, line.validated()),
            QuantityField::Validated => (line.confirmed(), value),
            QuantityField::Ordered => (0, 0),
        };
        if confirmed > validated {
            return Err(OrderDomainError::QuantityExceedsValidated {
                line: line_index,
                confirmed,
                validated,
            });
        }

        line.set_quantity(field, value);
        Ok(value)
    }

    /// Adds the selected catalog articles on behalf of `role`.
    ///
    /// Articles already on the order have their ordered quantity increased;
    /// others are appended as pending lines. No article ever appears on two
    /// lines.
    ///
    /// # Errors
    ///
    /// Returns [`OrderDomainError::LinesNotManageable`] when `role` may not
    /// add lines, or [`OrderDomainError::OrderLocked`] when the order is no
    /// longer editable.
    pub fn add_selection(
        &mut self,
        selection: &ArticleSelection,
        role: Role,
    ) -> Result<(), OrderDomainError> {
        self.ensure_lines_manageable(role)?;
        for (article, quantity) in selection.iter() {
            match self.lines.iter_mut().find(|line| line.article() == article) {
                Some(line) => line.add_ordered(quantity),
                None => self.lines.push(OrderLine::new(article.clone(), quantity)),
            }
        }
        Ok(())
    }

    /// Removes the line at `line_index` on behalf of `role`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderDomainError::LinesNotManageable`] when `role` may not
    /// remove lines, [`OrderDomainError::OrderLocked`] when the order is no
    /// longer editable, or [`OrderDomainError::LineNotFound`] when the index
    /// is out of range.
    pub fn remove_line(
        &mut self,
        line_index: usize,
        role: Role,
    ) -> Result<OrderLine, OrderDomainError> {
        self.ensure_lines_manageable(role)?;
        if line_index >= self.lines.len() {
            return Err(OrderDomainError::LineNotFound(line_index));
        }
        Ok(self.lines.remove(line_index))
    }

    /// Checks that the order is complete enough for `role` to submit.
    ///
    /// # Errors
    ///
    /// See [`validate_for_submit`].
    pub fn validate_for_submit(&self, role: Role) -> Result<(), OrderDomainError> {
        validate_for_submit(&self.lines, role)
    }

    fn ensure_lines_manageable(&self, role: Role) -> Result<(), OrderDomainError> {
        if !can_manage_lines(role) {
            return Err(OrderDomainError::LinesNotManageable(role));
        }
        match &self.status {
            Some(status) if !self.is_editable() => {
                Err(OrderDomainError::OrderLocked(status.clone()))
            }
            _ => Ok(()),
        }
    }
}

/// Checks a full set of order lines before submission by `role`.
///
/// Validators must have validated every line and confirmers must have
/// confirmed every line. No confirmed quantity may exceed its validated
/// quantity.
///
/// # Errors
///
/// - [`OrderDomainError::EmptyOrder`] when there are no lines.
/// - [`OrderDomainError::IncompleteValidation`] listing lines with a zero
///   validated quantity, for [`Role::Admin`].
/// - [`OrderDomainError::IncompleteConfirmation`] listing lines with a zero
///   confirmed quantity, for [`Role::Client`] and [`Role::Collaborator`].
/// - [`OrderDomainError::QuantityExceedsValidated`] for the first line whose
///   confirmed quantity exceeds its validated quantity.
pub fn validate_for_submit(lines: &[OrderLine], role: Role) -> Result<(), OrderDomainError> {
    if lines.is_empty() {
        return Err(OrderDomainError::EmptyOrder);
    }

    let missing = |field: QuantityField| -> Vec<usize> {
        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.quantity(field) == 0)
            .map(|(index, _)| index)
            .collect()
    };
    match role {
        Role::Admin => {
            let unvalidated = missing(QuantityField::Validated);
            if !unvalidated.is_empty() {
                return Err(OrderDomainError::IncompleteValidation { lines: unvalidated });
            }
        }
        Role::Client | Role::Collaborator => {
            let unconfirmed = missing(QuantityField::Confirmed);
            if !unconfirmed.is_empty() {
                return Err(OrderDomainError::IncompleteConfirmation { lines: unconfirmed });
            }
        }
        Role::User => {}
    }

    lines
        .iter()
        .enumerate()
        .find(|(_, line)| line.confirmed() > line.validated())
        .map_or(Ok(()), |(index, line)| {
            Err(OrderDomainError::QuantityExceedsValidated {
                line: index,
                confirmed: line.confirmed(),
                validated: line.validated(),
            })
        })
}
