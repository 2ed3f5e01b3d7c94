// Property-based tests for cart pricing
//
// Checks the pricing identities over random carts:
// - subtotal is the sum of line totals
// - discount only above the threshold, at 5%
// - shipping waived exactly when the taxed base reaches 50
// - total = taxed base + tax + shipping
// - an invoice exists exactly when every item is in stock

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use eco_invoice::core::AppError;
use eco_invoice::invoices::{CartItem, InvoiceCalculator};
use eco_invoice::pricing::{MonetaryAggregator, PricingPolicy, TaxCalculator};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

prop_compose! {
    fn stocked_item()(
        quantity in 1u32..20,
        cents in 0i64..20_000,
        extra_stock in 0u32..10,
        fragile in any::<bool>(),
    ) -> CartItem {
        CartItem::new("Producto", quantity, Decimal::new(cents, 2), quantity + extra_stock, fragile)
    }
}

prop_compose! {
    fn any_item()(
        quantity in 1u32..20,
        cents in 0i64..20_000,
        stock in 0u32..25,
    ) -> CartItem {
        CartItem::new("Producto", quantity, Decimal::new(cents, 2), stock, false)
    }
}

proptest! {
    #[test]
    fn test_subtotal_is_sum_of_lines(items in prop::collection::vec(stocked_item(), 0..8)) {
        let expected: Decimal = items
            .iter()
            .map(|i| Decimal::from(i.quantity) * i.unit_price)
            .sum();

        prop_assert_eq!(MonetaryAggregator::default().subtotal(&items).unwrap(), expected);
    }

    #[test]
    fn test_discount_threshold_rule(cents in 0i64..100_000) {
        let subtotal = Decimal::new(cents, 2);
        let discount = MonetaryAggregator::default().discount(subtotal);

        if subtotal > dec!(100) {
            prop_assert_eq!(discount, subtotal * dec!(0.05));
        } else {
            prop_assert_eq!(discount, Decimal::ZERO);
        }
    }

    #[test]
    fn test_shipping_threshold_rule(cents in 0i64..20_000) {
        let base = Decimal::new(cents, 2);
        let shipping = TaxCalculator::default().calculate_shipping(base);

        if base >= dec!(50) {
            prop_assert_eq!(shipping, Decimal::ZERO);
        } else {
            prop_assert_eq!(shipping, dec!(5.99));
        }
    }

    #[test]
    fn test_invoice_identities(items in prop::collection::vec(stocked_item(), 0..8)) {
        let policy = PricingPolicy::standard();
        let breakdown = InvoiceCalculator::new(policy).calculate(&items, today()).unwrap();

        prop_assert_eq!(breakdown.taxed_base, breakdown.subtotal - breakdown.discount);
        prop_assert_eq!(breakdown.tax_amount, breakdown.taxed_base * policy.tax_rate);
        prop_assert_eq!(
            breakdown.total,
            breakdown.taxed_base + breakdown.tax_amount + breakdown.shipping_cost
        );
        prop_assert_eq!(breakdown.fragile_packaging, items.iter().any(|i| i.is_fragile));
    }

    #[test]
    fn test_invoice_exists_iff_in_stock(items in prop::collection::vec(any_item(), 0..8)) {
        let all_in_stock = items.iter().all(|i| i.quantity <= i.available_stock);
        let result = InvoiceCalculator::default().calculate(&items, today());

        if all_in_stock {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(matches!(result, Err(AppError::StockShortage { .. })), "expected StockShortage, got {:?}", result);
        }
    }
}
