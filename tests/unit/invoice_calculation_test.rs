// Unit and property tests for invoice totals
//
// - subtotal = base_amount + Σ(quantity × unit_price) - discount
// - grand_total = subtotal + tax_amount
// - Line item amounts are summed unrounded and rounded once

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use dealerdesk::core::AppError;
use dealerdesk::invoices::{InvoiceCalculator, LineItem};
use dealerdesk::taxes::{Jurisdiction, TaxCalculator};

fn line_item() -> impl Strategy<Value = LineItem> {
    (1u32..20, 0i64..500_000).prop_map(|(quantity, cents)| {
        LineItem::new("Accessory", quantity, Decimal::new(cents, 2)).unwrap()
    })
}

proptest! {
    #[test]
    fn test_subtotal_composition(
        base_cents in 0i64..10_000_000,
        items in prop::collection::vec(line_item(), 0..8),
        discount_cents in 0i64..1_000_000,
    ) {
        let base_amount = Decimal::new(base_cents, 2);
        let discount = Decimal::new(discount_cents, 2);

        let result = InvoiceCalculator::new()
            .calculate_invoice_total(base_amount, &items, discount, Jurisdiction::ON)
            .unwrap();

        let expected_items: Decimal = items
            .iter()
            .map(|i| Decimal::from(i.quantity) * i.unit_price)
            .sum();

        prop_assert_eq!(result.line_items_total, expected_items);
        prop_assert_eq!(result.subtotal(), base_amount + expected_items - discount);
        prop_assert_eq!(result.grand_total(), result.subtotal() + result.tax_amount());
    }

    #[test]
    fn test_invoice_tax_matches_tax_calculator(
        base_cents in 0i64..10_000_000,
        jurisdiction in proptest::sample::select(Jurisdiction::ALL.to_vec()),
    ) {
        let base_amount = Decimal::new(base_cents, 2);

        let invoice = InvoiceCalculator::new()
            .calculate_invoice_total(base_amount, &[], Decimal::ZERO, jurisdiction)
            .unwrap();
        let tax = TaxCalculator::new().calculate_tax(base_amount, jurisdiction).unwrap();

        prop_assert_eq!(invoice.tax, tax);
    }
}

#[test]
fn test_ontario_invoice_scenario() {
    let items = vec![LineItem::new("Floor mats", 2, dec!(50)).unwrap()];

    let result = InvoiceCalculator::new()
        .calculate_invoice_total(dec!(500), &items, dec!(20), Jurisdiction::ON)
        .unwrap();

    assert_eq!(result.line_items_total, dec!(100));
    assert_eq!(result.subtotal(), dec!(580));
    assert_eq!(result.tax.hst, dec!(75.40));
    assert_eq!(result.grand_total(), dec!(655.40));
}

#[test]
fn test_discount_larger_than_amount() {
    let result = InvoiceCalculator::new()
        .calculate_invoice_total(dec!(100), &[], dec!(150), Jurisdiction::ON)
        .unwrap();

    assert_eq!(result.subtotal(), dec!(-50));
    assert_eq!(result.tax_amount(), dec!(-6.50));
    assert_eq!(result.grand_total(), dec!(-56.50));
}

#[test]
fn test_line_item_validation() {
    assert!(matches!(
        LineItem::new("Nothing", 0, dec!(10)),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        LineItem::new("Refund", 1, dec!(-10)),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn test_fractional_unit_price_rounds_once() {
    let items = vec![LineItem::new("Wiper fluid", 3, dec!(3.335)).unwrap()];

    let result = InvoiceCalculator::new()
        .calculate_invoice_total(Decimal::ZERO, &items, Decimal::ZERO, Jurisdiction::AB)
        .unwrap();

    // 3 × 3.335 = 10.005
    assert_eq!(result.line_items_total, dec!(10.01));
    assert_eq!(result.tax.gst, dec!(0.50));
}
