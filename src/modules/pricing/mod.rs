// Pricing module: the fixed policy plus the discount, tax and shipping math

pub mod models;
pub mod services;

pub use models::PricingPolicy;
pub use services::{MonetaryAggregator, MonetaryTotals, TaxBreakdown, TaxCalculator};
