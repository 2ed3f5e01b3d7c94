use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::error::{AppError, Result};
use crate::modules::pricing::models::PricingPolicy;

/// Tax, shipping and grand total derived from a post-discount base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxBreakdown {
    pub tax_amount: Decimal,
    pub shipping_cost: Decimal,
    pub total: Decimal,
}

/// TaxCalculator derives VAT and shipping from the taxed base
pub struct TaxCalculator {
    policy: PricingPolicy,
}

impl TaxCalculator {
    pub fn new(policy: PricingPolicy) -> Self {
        Self { policy }
    }

    /// tax_amount = taxed_base × tax_rate
    pub fn calculate_tax(&self, taxed_base: Decimal) -> Result<Decimal> {
        taxed_base
            .checked_mul(self.policy.tax_rate)
            .ok_or_else(AppError::amount_out_of_range)
    }

    /// Shipping is free once the post-discount base reaches the threshold.
    ///
    /// The base, not the raw subtotal, is compared, so a discount can push a
    /// cart back under the line and reintroduce the fee.
    pub fn calculate_shipping(&self, taxed_base: Decimal) -> Decimal {
        if taxed_base >= self.policy.free_shipping_threshold {
            Decimal::ZERO
        } else {
            self.policy.shipping_cost
        }
    }

    pub fn derive(&self, taxed_base: Decimal) -> Result<TaxBreakdown> {
        let tax_amount = self.calculate_tax(taxed_base)?;
        let shipping_cost = self.calculate_shipping(taxed_base);
        let total = taxed_base
            .checked_add(tax_amount)
            .and_then(|sum| sum.checked_add(shipping_cost))
            .ok_or_else(AppError::amount_out_of_range)?;

        Ok(TaxBreakdown {
            tax_amount,
            shipping_cost,
            total,
        })
    }

    /// Validate tax rate is within acceptable range (0-1.0) with max 4 decimal places
    pub fn validate_tax_rate(tax_rate: Decimal) -> Result<()> {
        if tax_rate < Decimal::ZERO {
            return Err(AppError::Configuration(
                "Tax rate cannot be negative".to_string(),
            ));
        }

        if tax_rate > Decimal::ONE {
            return Err(AppError::Configuration(
                "Tax rate cannot exceed 1.0 (100%)".to_string(),
            ));
        }

        if tax_rate.normalize().scale() > 4 {
            return Err(AppError::Configuration(
                "Tax rate cannot have more than 4 decimal places".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new(PricingPolicy::standard())
    }
}
