// Fixed pricing policy for every invoice.
//
// Built once at startup and handed to the calculator by value. There is a
// single policy for the whole process; nothing mutates it after construction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::pricing::services::TaxCalculator;

/// Tax, discount, shipping and delivery rules applied to a cart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// VAT applied to the post-discount base (0.21)
    pub tax_rate: Decimal,

    /// Subtotal that must be strictly exceeded to earn the discount (100)
    pub discount_threshold: Decimal,

    /// Fraction of the subtotal taken off once over the threshold (0.05)
    pub discount_rate: Decimal,

    /// Flat shipping fee charged below the free-shipping line (5.99)
    pub shipping_cost: Decimal,

    /// Post-discount base at or above which shipping is waived (50)
    pub free_shipping_threshold: Decimal,

    /// Calendar days between the invoice date and the estimated delivery (3)
    pub delivery_days: u64,
}

impl PricingPolicy {
    /// The store's standard policy
    pub fn standard() -> Self {
        Self {
            tax_rate: Decimal::new(21, 2),
            discount_threshold: Decimal::new(100, 0),
            discount_rate: Decimal::new(5, 2),
            shipping_cost: Decimal::new(599, 2),
            free_shipping_threshold: Decimal::new(50, 0),
            delivery_days: 3,
        }
    }

    /// Validate that rates are fractions and amounts are non-negative
    pub fn validate(&self) -> Result<()> {
        TaxCalculator::validate_tax_rate(self.tax_rate)?;

        if self.discount_rate < Decimal::ZERO || self.discount_rate > Decimal::ONE {
            return Err(AppError::Configuration(format!(
                "Discount rate must be between 0 and 1, got: {}",
                self.discount_rate
            )));
        }

        for (label, amount) in [
            ("Discount threshold", self.discount_threshold),
            ("Shipping cost", self.shipping_cost),
            ("Free shipping threshold", self.free_shipping_threshold),
        ] {
            if amount < Decimal::ZERO {
                return Err(AppError::Configuration(format!(
                    "{} cannot be negative, got: {}",
                    label, amount
                )));
            }
        }

        Ok(())
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
