//! Invoice Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Line item as stored and returned by the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceItem {
    pub id: i64,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    /// Computed by the server: `quantity * unit_price`, rounded to cents.
    /// Never authoritative input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
}

/// Persisted invoice (read-only to the client)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    /// Server-assigned, unique invoice number
    pub invoice_number: i64,
    pub client_name: String,
    pub client_email: String,
    /// Issue date, set by the server on creation
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    /// VAT percentage, e.g. 21.0 means 21%
    pub vat_rate: f64,

    // -- Computed server-side on persisted invoices --
    pub subtotal: f64,
    pub vat_amount: f64,
    pub total_amount: f64,

    pub items: Vec<InvoiceItem>,
}

/// Create/update invoice payload
///
/// Same shape as the draft, but with client-only item ids stripped; the
/// server assigns its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoicePayload {
    pub client_name: String,
    pub client_email: String,
    pub due_date: NaiveDate,
    pub vat_rate: f64,
    pub items: Vec<ItemPayload>,
}

/// Line item within a create/update payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemPayload {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
}
