// Invoice data: the computed breakdown, the rendered ticket, and the request
// and response bodies exchanged with HTTP clients.
//
// Nothing here is persisted. A breakdown is computed per call and dropped once
// the response has been written.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{CartItem, Customer};
use crate::core::{AppError, Result};

/// Every derived quantity of an invoice, at full precision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceBreakdown {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub taxed_base: Decimal,
    pub tax_amount: Decimal,
    pub shipping_cost: Decimal,
    pub total: Decimal,
    pub fragile_packaging: bool,
    pub estimated_delivery: NaiveDate,
}

impl InvoiceBreakdown {
    pub fn has_free_shipping(&self) -> bool {
        self.shipping_cost.is_zero()
    }
}

/// A computed invoice together with its receipt text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedInvoice {
    pub breakdown: InvoiceBreakdown,
    pub ticket: String,
}

/// Body of an invoice request, either POSTed or loaded from a stored file.
///
/// `cart` stays untyped until [`CreateInvoiceRequest::into_parts`] so that a
/// non-list cart is reported as an invalid request instead of a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateInvoiceRequest {
    #[serde(default, alias = "cliente")]
    pub customer: Option<Customer>,

    #[serde(default, alias = "carrito")]
    pub cart: Option<Value>,
}

impl CreateInvoiceRequest {
    pub fn new(customer: Customer, cart: Vec<CartItem>) -> Result<Self> {
        Ok(Self {
            customer: Some(customer),
            cart: Some(serde_json::to_value(cart)?),
        })
    }

    /// Check the request shape and split it into calculator inputs
    pub fn into_parts(self) -> Result<(Customer, Vec<CartItem>)> {
        let (customer, cart) = match (self.customer, self.cart) {
            (Some(customer), Some(cart @ Value::Array(_))) => (customer, cart),
            _ => {
                return Err(AppError::invalid_request(
                    "Missing customer data or the cart is not a list",
                ))
            }
        };

        customer.validate()?;

        let items: Vec<CartItem> = serde_json::from_value(cart)
            .map_err(|e| AppError::invalid_request(format!("Malformed cart item: {}", e)))?;
        for item in &items {
            item.validate()?;
        }

        Ok((customer, items))
    }
}

/// Success envelope returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceResponse {
    pub message: String,
    pub ticket: String,
}

impl InvoiceResponse {
    pub fn new(ticket: String) -> Self {
        Self {
            message: "Invoice generated successfully".to_string(),
            ticket,
        }
    }
}

impl From<RenderedInvoice> for InvoiceResponse {
    fn from(invoice: RenderedInvoice) -> Self {
        Self::new(invoice.ticket)
    }
}
