//! Invoice draft editing
//!
//! An [`InvoiceDraft`] is the in-memory invoice being composed or edited
//! client-side. It owns an ordered, never-empty list of line items and
//! derives the monetary summary (subtotal, VAT, total) from them on demand.

pub mod editor;

// Re-exports
pub use editor::{InvoiceDraft, ItemEdit, LineItem};
