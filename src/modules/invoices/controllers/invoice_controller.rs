use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};

use crate::core::error::AppError;
use crate::middleware::RequestIdValue;
use crate::modules::invoices::models::{CreateInvoiceRequest, InvoiceResponse};
use crate::modules::invoices::services::InvoiceService;

/// Generate an invoice from a posted customer and cart
/// POST /invoices
pub async fn create_invoice(
    req: HttpRequest,
    service: web::Data<Arc<InvoiceService>>,
    request: web::Json<CreateInvoiceRequest>,
) -> Result<HttpResponse, AppError> {
    let request_id = RequestIdValue::from_request(&req);
    tracing::info!(request_id = ?request_id, "Invoice request received with a new cart");

    let invoice = service
        .generate(request.into_inner())
        .map_err(|err| log_rejection(err, request_id.as_deref()))?;

    Ok(HttpResponse::Ok().json(InvoiceResponse::from(invoice)))
}

/// Generate an invoice from a stored cart file
/// GET /invoices/{file}
pub async fn get_invoice_from_file(
    req: HttpRequest,
    service: web::Data<Arc<InvoiceService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let request_id = RequestIdValue::from_request(&req);
    let file = path.into_inner();
    let invoice = service
        .generate_from_file(&file)
        .await
        .map_err(|err| log_rejection(err, request_id.as_deref()))?;

    Ok(HttpResponse::Ok().json(InvoiceResponse::from(invoice)))
}

fn log_rejection(err: AppError, request_id: Option<&str>) -> AppError {
    if err.is_client_error() {
        tracing::warn!(request_id = ?request_id, error = %err, "Invoice request rejected");
    } else {
        tracing::error!(request_id = ?request_id, error = %err, "Invoice generation failed");
    }
    err
}

/// Configure invoice routes
///
/// `/factura` is kept as an alias for clients of the older endpoint.
pub fn configure(cfg: &mut web::ServiceConfig) {
    for scope in ["/invoices", "/factura"] {
        cfg.service(
            web::scope(scope)
                .route("", web::post().to(create_invoice))
                .route("/{file}", web::get().to(get_invoice_from_file)),
        );
    }
}
