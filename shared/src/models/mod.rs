//! Data models
//!
//! Wire types shared with the invoicing REST API. The server owns
//! `invoice_number`, `date` and the computed monetary fields; clients send
//! `InvoicePayload` and get `Invoice` back.

pub mod invoice;

// Re-exports
pub use invoice::*;
