// Unit and property tests for vehicle profit
//
// - total_cost = purchase + extra costs + taxes on purchase
// - gross_profit = retail - total_cost
// - margin is a percentage of retail, zero when nothing was spent

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use dealerdesk::core::AppError;
use dealerdesk::vehicles::ProfitCalculator;

fn cents(max: i64) -> impl Strategy<Value = Decimal> {
    (0..max).prop_map(|c| Decimal::new(c, 2))
}

proptest! {
    #[test]
    fn test_profit_identity(
        purchase in cents(10_000_000),
        retail in cents(10_000_000).prop_map(|r| r + Decimal::ONE),
        extra in cents(500_000),
        taxes in cents(500_000),
    ) {
        let profit = ProfitCalculator::calculate_vehicle_profit(purchase, retail, extra, taxes).unwrap();

        prop_assert_eq!(profit.total_cost, purchase + extra + taxes);
        prop_assert_eq!(profit.gross_profit, retail - profit.total_cost);
        prop_assert_eq!(profit.retail_price, retail);
    }

    #[test]
    fn test_margin_never_exceeds_hundred(
        purchase in cents(10_000_000).prop_map(|p| p + Decimal::ONE),
        retail in cents(10_000_000).prop_map(|r| r + Decimal::ONE),
    ) {
        let profit = ProfitCalculator::calculate_vehicle_profit(purchase, retail, Decimal::ZERO, Decimal::ZERO).unwrap();
        prop_assert!(profit.profit_margin <= dec!(100));
    }
}

#[test]
fn test_profit_scenario() {
    let profit =
        ProfitCalculator::calculate_vehicle_profit(dec!(20000), dec!(25000), dec!(500), dec!(0))
            .unwrap();

    assert_eq!(profit.total_cost, dec!(20500));
    assert_eq!(profit.gross_profit, dec!(4500));
    assert_eq!(profit.profit_margin, dec!(18));
}

#[test]
fn test_loss_has_negative_margin() {
    let profit =
        ProfitCalculator::calculate_vehicle_profit(dec!(10000), dec!(8000), dec!(0), dec!(0))
            .unwrap();

    assert_eq!(profit.gross_profit, dec!(-2000));
    assert_eq!(profit.profit_margin, dec!(-25));
}

#[test]
fn test_zero_cost_has_zero_margin() {
    let profit =
        ProfitCalculator::calculate_vehicle_profit(dec!(0), dec!(5000), dec!(0), dec!(0)).unwrap();

    assert_eq!(profit.gross_profit, dec!(5000));
    assert_eq!(profit.profit_margin, Decimal::ZERO);
}

#[test]
fn test_zero_retail_with_cost_is_rejected() {
    let result =
        ProfitCalculator::calculate_vehicle_profit(dec!(1000), dec!(0), dec!(0), dec!(0));
    assert!(matches!(result, Err(AppError::Validation(_))));
}
