//! Eco Invoice Library
//!
//! Prices a shopping cart for a customer and renders the shop's receipt.
//! The calculator in [`modules::invoices`] is pure; the HTTP layer around it
//! decodes requests, reads the clock and loads stored carts.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

use std::sync::Arc;

use actix_web::web;

// Re-export commonly used types
pub use modules::invoices;
pub use modules::pricing;

use crate::core::Clock;
use crate::modules::invoices::services::{InvoiceCalculator, InvoiceLoader, InvoiceService};
use crate::modules::pricing::PricingPolicy;

/// Build the shared invoice service from a policy, clock and data directory
pub fn build_invoice_service(
    policy: PricingPolicy,
    clock: Arc<dyn Clock>,
    invoice_data_dir: impl Into<std::path::PathBuf>,
) -> Arc<InvoiceService> {
    Arc::new(InvoiceService::new(
        InvoiceCalculator::new(policy),
        clock,
        InvoiceLoader::new(invoice_data_dir),
    ))
}

/// Register every route and the shared extractors on an app
pub fn configure_app(service: Arc<InvoiceService>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(service))
            .app_data(web::JsonConfig::default().error_handler(middleware::json_error_handler))
            .configure(modules::health::controllers::configure)
            .configure(modules::invoices::controllers::configure);
    }
}
