// factura-client/tests/invoice_api.rs
// Integration tests against an in-process mock of the invoicing API.

use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use factura_client::{pdf_filename, ClientConfig, ClientError};
use shared::models::{Invoice, InvoiceItem, InvoicePayload, ItemPayload};

const PDF_BYTES: &[u8] = b"%PDF-1.4 mock invoice";

fn fixture_invoice() -> Invoice {
    Invoice {
        invoice_number: 7,
        client_name: "ACME S.L.".to_string(),
        client_email: "billing@acme.example".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        due_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
        vat_rate: 21.0,
        subtotal: 125.0,
        vat_amount: 26.25,
        total_amount: 151.25,
        items: vec![
            InvoiceItem {
                id: 1,
                description: "Design work".to_string(),
                quantity: 2.0,
                unit_price: 50.0,
                total_price: Some(100.0),
            },
            InvoiceItem {
                id: 2,
                description: "Hosting".to_string(),
                quantity: 1.0,
                unit_price: 25.0,
                total_price: Some(25.0),
            },
        ],
    }
}

/// Persist a payload the way the server would: assign ids and compute the
/// monetary summary.
fn persist(invoice_number: i64, payload: InvoicePayload) -> Invoice {
    let items: Vec<InvoiceItem> = payload
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| InvoiceItem {
            id: i as i64 + 1,
            description: item.description.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            total_price: Some(item.quantity * item.unit_price),
        })
        .collect();
    let subtotal: f64 = items.iter().filter_map(|i| i.total_price).sum();
    let vat_amount = subtotal * payload.vat_rate / 100.0;

    Invoice {
        invoice_number,
        client_name: payload.client_name,
        client_email: payload.client_email,
        date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        due_date: payload.due_date,
        vat_rate: payload.vat_rate,
        subtotal,
        vat_amount,
        total_amount: subtotal + vat_amount,
        items,
    }
}

async fn list_handler() -> Json<Vec<Invoice>> {
    Json(vec![fixture_invoice()])
}

async fn get_handler(Path(n): Path<i64>) -> Result<Json<Invoice>, StatusCode> {
    if n == 7 {
        Ok(Json(fixture_invoice()))
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

async fn create_handler(Json(payload): Json<InvoicePayload>) -> impl IntoResponse {
    if payload.client_name.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            r#"{"client_name":["This field may not be blank."]}"#.to_string(),
        )
            .into_response();
    }
    (StatusCode::CREATED, Json(persist(99, payload))).into_response()
}

async fn update_handler(
    Path(n): Path<i64>,
    Json(payload): Json<InvoicePayload>,
) -> Result<Json<Invoice>, StatusCode> {
    if n == 7 {
        Ok(Json(persist(7, payload)))
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

async fn delete_handler(Path(n): Path<i64>) -> StatusCode {
    if n == 7 {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn pdf_handler(Path(n): Path<i64>) -> impl IntoResponse {
    if n == 7 {
        ([(header::CONTENT_TYPE, "application/pdf")], PDF_BYTES).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

/// Bind the mock API on an ephemeral port and return its base URL.
async fn spawn_server() -> String {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let app = Router::new()
        .route("/invoices/", get(list_handler).post(create_handler))
        .route(
            "/invoices/{n}/",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .route("/invoices/{n}/pdf/", get(pdf_handler));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn sample_payload() -> InvoicePayload {
    InvoicePayload {
        client_name: "ACME S.L.".to_string(),
        client_email: "billing@acme.example".to_string(),
        due_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
        vat_rate: 21.0,
        items: vec![
            ItemPayload {
                description: "Design work".to_string(),
                quantity: 2.0,
                unit_price: 50.0,
            },
            ItemPayload {
                description: "Hosting".to_string(),
                quantity: 1.0,
                unit_price: 25.0,
            },
        ],
    }
}

#[tokio::test]
async fn test_list_invoices() {
    let client = ClientConfig::new(spawn_server().await).build_client();

    let invoices = client.list_invoices().await.unwrap();
    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0].invoice_number, 7);
    assert_eq!(invoices[0].total_amount, 151.25);
    assert_eq!(invoices[0].items.len(), 2);
}

#[tokio::test]
async fn test_get_invoice() {
    let client = ClientConfig::new(spawn_server().await).build_client();

    let invoice = client.get_invoice(7).await.unwrap();
    assert_eq!(invoice.client_name, "ACME S.L.");
    assert_eq!(invoice.date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    assert_eq!(invoice.items[0].total_price, Some(100.0));
}

#[tokio::test]
async fn test_get_missing_invoice_is_not_found() {
    let client = ClientConfig::new(spawn_server().await).build_client();

    let err = client.get_invoice(8).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn test_create_invoice_returns_assigned_number_and_totals() {
    let client = ClientConfig::new(spawn_server().await).build_client();

    let created = client.create_invoice(&sample_payload()).await.unwrap();
    assert_eq!(created.invoice_number, 99);
    assert_eq!(created.subtotal, 125.0);
    assert_eq!(created.vat_amount, 26.25);
    assert_eq!(created.total_amount, 151.25);
}

#[tokio::test]
async fn test_create_invalid_invoice_is_validation_error() {
    let client = ClientConfig::new(spawn_server().await).build_client();

    let mut payload = sample_payload();
    payload.client_name.clear();

    let err = client.create_invoice(&payload).await.unwrap_err();
    match err {
        ClientError::Validation(body) => assert!(body.contains("client_name")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_update_invoice() {
    let client = ClientConfig::new(spawn_server().await).build_client();

    let mut payload = sample_payload();
    payload.vat_rate = 10.0;

    let updated = client.update_invoice(7, &payload).await.unwrap();
    assert_eq!(updated.invoice_number, 7);
    assert_eq!(updated.vat_amount, 12.5);
}

#[tokio::test]
async fn test_delete_invoice() {
    let client = ClientConfig::new(spawn_server().await).build_client();

    client.delete_invoice(7).await.unwrap();

    let err = client.delete_invoice(12).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn test_download_invoice_pdf() {
    let client = ClientConfig::new(spawn_server().await).build_client();

    let bytes = client.invoice_pdf(7).await.unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(pdf_filename(7), "invoice_7.pdf");
}
