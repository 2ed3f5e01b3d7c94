use std::sync::Arc;

use crate::core::{Clock, Result};
use crate::modules::invoices::models::{CreateInvoiceRequest, RenderedInvoice};
use crate::modules::invoices::services::invoice_calculator::InvoiceCalculator;
use crate::modules::invoices::services::invoice_loader::InvoiceLoader;

/// Request-facing wrapper around the calculator.
///
/// Owns the clock and the file loader, so the calculator itself stays free of
/// I/O and wall-clock reads.
pub struct InvoiceService {
    calculator: InvoiceCalculator,
    clock: Arc<dyn Clock>,
    loader: InvoiceLoader,
}

impl InvoiceService {
    pub fn new(calculator: InvoiceCalculator, clock: Arc<dyn Clock>, loader: InvoiceLoader) -> Self {
        Self {
            calculator,
            clock,
            loader,
        }
    }

    /// Validate the request shape and compute its invoice
    pub fn generate(&self, request: CreateInvoiceRequest) -> Result<RenderedInvoice> {
        let (customer, items) = request.into_parts()?;

        tracing::info!(
            customer = %customer.name,
            items = items.len(),
            "Generating invoice"
        );

        // Read once; every derived date in this invoice uses the same day
        let today = self.clock.today();
        let invoice = self.calculator.compute_invoice(&customer, &items, today)?;

        tracing::debug!(
            total = %invoice.breakdown.total,
            free_shipping = invoice.breakdown.has_free_shipping(),
            "Invoice computed"
        );

        Ok(invoice)
    }

    /// Load a stored request by file name and compute its invoice
    pub async fn generate_from_file(&self, name: &str) -> Result<RenderedInvoice> {
        tracing::info!(file = %name, "Loading stored cart");
        let request = self.loader.load(name).await?;
        self.generate(request)
    }
}
