//! Factura Client - HTTP client for the invoicing REST API
//!
//! Provides network-based calls for the invoice CRUD endpoints and the
//! PDF download.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, pdf_filename};

// Re-export shared types for convenience
pub use shared::models::{Invoice, InvoiceItem, InvoicePayload, ItemPayload};
