//! HTTP client for the invoicing REST API

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{Invoice, InvoicePayload};

use crate::{ClientConfig, ClientError, ClientResult};

/// Suggested download filename for an invoice PDF
pub fn pdf_filename(invoice_number: i64) -> String {
    format!("invoice_{}.pdf", invoice_number)
}

/// HTTP client for making network requests to the invoicing server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request and return the raw body bytes
    async fn get_bytes(&self, path: &str) -> ClientResult<Vec<u8>> {
        let url = self.url(path);
        tracing::debug!(%url, "GET (binary)");
        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "PUT");
        let response = self.client.put(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request (no response body expected)
    async fn delete(&self, path: &str) -> ClientResult<()> {
        let url = self.url(path);
        tracing::debug!(%url, "DELETE");
        let response = self.client.delete(&url).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Map non-2xx statuses to client errors
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            tracing::warn!(%status, "request failed");
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        Ok(response)
    }

    /// Handle the HTTP response, deserializing a JSON body
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        response.json().await.map_err(Into::into)
    }

    // ========== Invoice API ==========

    /// List all invoices
    pub async fn list_invoices(&self) -> ClientResult<Vec<Invoice>> {
        self.get("invoices/").await
    }

    /// Fetch a single invoice
    pub async fn get_invoice(&self, invoice_number: i64) -> ClientResult<Invoice> {
        self.get(&format!("invoices/{}/", invoice_number)).await
    }

    /// Create an invoice; the server assigns the invoice number and
    /// computes the monetary summary
    pub async fn create_invoice(&self, payload: &InvoicePayload) -> ClientResult<Invoice> {
        self.post("invoices/", payload).await
    }

    /// Replace an existing invoice
    pub async fn update_invoice(
        &self,
        invoice_number: i64,
        payload: &InvoicePayload,
    ) -> ClientResult<Invoice> {
        self.put(&format!("invoices/{}/", invoice_number), payload)
            .await
    }

    /// Delete an invoice
    pub async fn delete_invoice(&self, invoice_number: i64) -> ClientResult<()> {
        self.delete(&format!("invoices/{}/", invoice_number)).await
    }

    /// Download the rendered PDF for an invoice
    pub async fn invoice_pdf(&self, invoice_number: i64) -> ClientResult<Vec<u8>> {
        self.get_bytes(&format!("invoices/{}/pdf/", invoice_number))
            .await
    }
}
