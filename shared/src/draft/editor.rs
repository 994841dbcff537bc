//! Draft editor - mutable invoice state and computed totals
//!
//! One logical draft exists per editing session. Every mutation runs to
//! completion before the next event is handled, so there is no interleaving
//! to coordinate. Totals are derived, never stored.

use chrono::NaiveDate;

use crate::error::DraftError;
use crate::models::{Invoice, InvoicePayload, ItemPayload};
use crate::money::sanitize;

/// Default VAT percentage for new drafts
pub const DEFAULT_VAT_RATE: f64 = 21.0;

/// One billable row within a draft
///
/// The `id` is client-assigned and only used as a stable key for edit and
/// remove targeting; it is stripped from persistence payloads.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub id: i64,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
}

impl LineItem {
    fn blank(id: i64) -> Self {
        Self {
            id,
            description: String::new(),
            quantity: 1.0,
            unit_price: 0.0,
        }
    }

    /// Line total with partially-entered rows counting as zero
    pub fn line_total(&self) -> f64 {
        sanitize(sanitize(self.quantity) * sanitize(self.unit_price))
    }
}

/// A single field edit on a line item
#[derive(Debug, Clone, PartialEq)]
pub enum ItemEdit {
    Description(String),
    Quantity(f64),
    UnitPrice(f64),
}

/// Invoice being composed or edited client-side
///
/// Invariants:
/// - `items` is never empty; removal of the last item is refused.
/// - Item ids are unique for the lifetime of the draft, assigned from a
///   monotonic counter and never reused after removal.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    pub client_name: String,
    pub client_email: String,
    pub due_date: Option<NaiveDate>,
    /// VAT percentage, e.g. 21.0 means 21%
    pub vat_rate: f64,
    items: Vec<LineItem>,
    next_id: i64,
}

impl InvoiceDraft {
    /// Create a blank draft for the create flow: one empty line item,
    /// default VAT rate.
    pub fn new() -> Self {
        Self {
            client_name: String::new(),
            client_email: String::new(),
            due_date: None,
            vat_rate: DEFAULT_VAT_RATE,
            items: vec![LineItem::blank(1)],
            next_id: 2,
        }
    }

    /// Hydrate a draft from a fetched invoice for the edit flow.
    ///
    /// Item ids are reassigned from 1; server ids are not carried over.
    /// A server response without items still yields a valid draft with one
    /// blank row.
    pub fn from_invoice(invoice: &Invoice) -> Self {
        let mut items: Vec<LineItem> = invoice
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| LineItem {
                id: i as i64 + 1,
                description: item.description.clone(),
                quantity: sanitize(item.quantity),
                unit_price: sanitize(item.unit_price),
            })
            .collect();
        if items.is_empty() {
            items.push(LineItem::blank(1));
        }
        let next_id = items.len() as i64 + 1;

        Self {
            client_name: invoice.client_name.clone(),
            client_email: invoice.client_email.clone(),
            due_date: Some(invoice.due_date),
            vat_rate: sanitize(invoice.vat_rate),
            items,
            next_id,
        }
    }

    /// Line items in display order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Append a blank line item and return its id.
    pub fn add_item(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(LineItem::blank(id));
        id
    }

    /// Remove the line item with the given id.
    ///
    /// Refused with [`DraftError::LastItem`] when only one item remains,
    /// leaving the draft unchanged; the caller surfaces this as a warning.
    /// The length check comes first, so the refusal applies even for an
    /// unknown id.
    pub fn remove_item(&mut self, id: i64) -> Result<(), DraftError> {
        if self.items.len() == 1 {
            return Err(DraftError::LastItem);
        }
        self.items.retain(|item| item.id != id);
        Ok(())
    }

    /// Apply a single field edit to the line item with the given id.
    ///
    /// An unknown id leaves the draft unchanged. Numeric values are
    /// NaN-guarded on the way in.
    pub fn edit_item(&mut self, id: i64, edit: ItemEdit) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            tracing::warn!(id, "edit targets unknown line item, ignored");
            return;
        };
        match edit {
            ItemEdit::Description(description) => item.description = description,
            ItemEdit::Quantity(quantity) => item.quantity = sanitize(quantity),
            ItemEdit::UnitPrice(unit_price) => item.unit_price = sanitize(unit_price),
        }
    }

    /// Sum of `quantity * unit_price` over all items
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// `subtotal * vat_rate / 100`
    pub fn vat_amount(&self) -> f64 {
        self.subtotal() * sanitize(self.vat_rate) / 100.0
    }

    /// `subtotal + vat_amount`
    pub fn total(&self) -> f64 {
        self.subtotal() + self.vat_amount()
    }

    /// Required-field presence check: client name, client email, due date.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.client_name.trim().is_empty() {
            return Err(DraftError::RequiredField("client_name"));
        }
        if self.client_email.trim().is_empty() {
            return Err(DraftError::RequiredField("client_email"));
        }
        if self.due_date.is_none() {
            return Err(DraftError::RequiredField("due_date"));
        }
        Ok(())
    }

    /// Build the wire payload for create/update.
    ///
    /// Client-only item ids are stripped and numerics forced; the draft
    /// must pass [`validate`](Self::validate) first.
    pub fn to_payload(&self) -> Result<InvoicePayload, DraftError> {
        self.validate()?;
        let due_date = self
            .due_date
            .ok_or(DraftError::RequiredField("due_date"))?;
        Ok(InvoicePayload {
            client_name: self.client_name.clone(),
            client_email: self.client_email.clone(),
            due_date,
            vat_rate: sanitize(self.vat_rate),
            items: self
                .items
                .iter()
                .map(|item| ItemPayload {
                    description: item.description.clone(),
                    quantity: sanitize(item.quantity),
                    unit_price: sanitize(item.unit_price),
                })
                .collect(),
        })
    }
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self::new()
    }
}
