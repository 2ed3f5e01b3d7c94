use chrono::{Days, NaiveDate};

use crate::core::{AppError, Result};
use crate::modules::invoices::models::{CartItem, Customer, InvoiceBreakdown, RenderedInvoice};
use crate::modules::invoices::services::invoice_renderer::InvoiceRenderer;
use crate::modules::invoices::services::stock_validator::StockValidator;
use crate::modules::pricing::{MonetaryAggregator, PricingPolicy, TaxCalculator};

/// Turns a customer and cart into a priced, rendered invoice.
///
/// Pure: no I/O, no logging, no shared mutable state. `today` is supplied by
/// the caller so one invoice always sees one date.
pub struct InvoiceCalculator {
    policy: PricingPolicy,
    aggregator: MonetaryAggregator,
    tax_calculator: TaxCalculator,
}

impl InvoiceCalculator {
    pub fn new(policy: PricingPolicy) -> Self {
        Self {
            policy,
            aggregator: MonetaryAggregator::new(policy),
            tax_calculator: TaxCalculator::new(policy),
        }
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Stock check, then every derived amount. Fails with
    /// [`AppError::StockShortage`] before any arithmetic runs.
    pub fn calculate(&self, items: &[CartItem], today: NaiveDate) -> Result<InvoiceBreakdown> {
        StockValidator::ensure_in_stock(items)?;

        let totals = self.aggregator.aggregate(items)?;
        let taxes = self.tax_calculator.derive(totals.taxed_base)?;

        Ok(InvoiceBreakdown {
            subtotal: totals.subtotal,
            discount: totals.discount,
            taxed_base: totals.taxed_base,
            tax_amount: taxes.tax_amount,
            shipping_cost: taxes.shipping_cost,
            total: taxes.total,
            fragile_packaging: items.iter().any(|item| item.is_fragile),
            estimated_delivery: self.estimated_delivery(today)?,
        })
    }

    pub fn compute_invoice(
        &self,
        customer: &Customer,
        items: &[CartItem],
        today: NaiveDate,
    ) -> Result<RenderedInvoice> {
        let breakdown = self.calculate(items, today)?;
        let ticket = InvoiceRenderer::render(customer, items, &breakdown, &self.policy);

        Ok(RenderedInvoice { breakdown, ticket })
    }

    fn estimated_delivery(&self, today: NaiveDate) -> Result<NaiveDate> {
        today
            .checked_add_days(Days::new(self.policy.delivery_days))
            .ok_or_else(|| AppError::internal("Estimated delivery date is out of range"))
    }
}

impl Default for InvoiceCalculator {
    fn default() -> Self {
        Self::new(PricingPolicy::standard())
    }
}
