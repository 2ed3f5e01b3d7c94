use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{AppError, Result};
use crate::modules::invoices::models::CartItem;
use crate::modules::pricing::models::PricingPolicy;

/// Cart-level amounts before tax and shipping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonetaryTotals {
    pub subtotal: Decimal,
    pub discount: Decimal,
    /// subtotal - discount
    pub taxed_base: Decimal,
}

/// Sums a cart and applies the volume discount
pub struct MonetaryAggregator {
    policy: PricingPolicy,
}

impl MonetaryAggregator {
    pub fn new(policy: PricingPolicy) -> Self {
        Self { policy }
    }

    /// Σ unit_price × quantity, folded in cart order
    pub fn subtotal(&self, items: &[CartItem]) -> Result<Decimal> {
        items.iter().try_fold(Decimal::ZERO, |acc, item| {
            acc.checked_add(item.line_total()?)
                .ok_or_else(AppError::amount_out_of_range)
        })
    }

    /// Discount earned by a subtotal.
    ///
    /// The comparison is strict: a cart priced exactly at the threshold pays
    /// full price.
    pub fn discount(&self, subtotal: Decimal) -> Decimal {
        if subtotal > self.policy.discount_threshold {
            subtotal * self.policy.discount_rate
        } else {
            Decimal::ZERO
        }
    }

    pub fn aggregate(&self, items: &[CartItem]) -> Result<MonetaryTotals> {
        let subtotal = self.subtotal(items)?;
        // a validated policy keeps discount_rate in [0, 1]
        let discount = self.discount(subtotal);
        let taxed_base = subtotal
            .checked_sub(discount)
            .ok_or_else(AppError::amount_out_of_range)?;

        Ok(MonetaryTotals {
            subtotal,
            discount,
            taxed_base,
        })
    }
}

impl Default for MonetaryAggregator {
    fn default() -> Self {
        Self::new(PricingPolicy::standard())
    }
}
