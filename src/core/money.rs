use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places shown on receipts
pub const DISPLAY_SCALE: u32 = 2;

/// Currency suffix appended to every displayed amount
pub const CURRENCY_SUFFIX: &str = "€";

/// Rounds an amount for display.
///
/// Internal arithmetic keeps full precision; only rendered values go through
/// here. Midpoints round away from zero (5.005 -> 5.01).
pub fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with exactly two decimals and no suffix
pub fn format_plain(amount: Decimal) -> String {
    format!(
        "{:.width$}",
        round_for_display(amount),
        width = DISPLAY_SCALE as usize
    )
}

/// Formats an amount with exactly two decimals followed by the currency suffix
pub fn format_amount(amount: Decimal) -> String {
    format!("{}{}", format_plain(amount), CURRENCY_SUFFIX)
}

/// Formats a rate as a whole-number percentage label (0.21 -> "21%")
pub fn format_percentage(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}
