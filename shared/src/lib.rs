//! Shared types for the Factura invoicing client
//!
//! Common types used across crates: the invoice wire model exchanged with
//! the REST API, the client-side draft editor, and money helpers.

pub mod draft;
pub mod error;
pub mod models;
pub mod money;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use draft::{InvoiceDraft, ItemEdit, LineItem};
pub use error::DraftError;
pub use models::{Invoice, InvoiceItem, InvoicePayload, ItemPayload};
