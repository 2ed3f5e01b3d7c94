pub mod monetary_aggregator;
pub mod tax_calculator;

pub use monetary_aggregator::{MonetaryAggregator, MonetaryTotals};
pub use tax_calculator::{TaxBreakdown, TaxCalculator};
