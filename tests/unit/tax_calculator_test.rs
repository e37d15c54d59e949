// Property-based tests for jurisdiction tax calculation
//
// - Identical inputs give identical breakdowns
// - HST jurisdictions report HST only; others report GST and PST only
// - Grand total equals subtotal plus tax for cent-precision subtotals
// - Components sum to the tax amount (within a cent when GST and PST both apply)
// - Every reported figure has at most two decimal places

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use dealerdesk::core::AppError;
use dealerdesk::taxes::{lookup, Jurisdiction, TaxCalculator};

fn any_jurisdiction() -> impl Strategy<Value = Jurisdiction> {
    proptest::sample::select(Jurisdiction::ALL.to_vec())
}

/// Cent-precision amounts between -1,000,000.00 and 10,000,000.00
fn cents() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..1_000_000_000i64).prop_map(|c| Decimal::new(c, 2))
}

proptest! {
    #[test]
    fn test_calculation_is_deterministic(subtotal in cents(), jurisdiction in any_jurisdiction()) {
        let calculator = TaxCalculator::new();
        prop_assert_eq!(
            calculator.calculate_tax(subtotal, jurisdiction).unwrap(),
            calculator.calculate_tax(subtotal, jurisdiction).unwrap()
        );
    }

    #[test]
    fn test_regime_is_exclusive(subtotal in cents(), jurisdiction in any_jurisdiction()) {
        let breakdown = TaxCalculator::new().calculate_tax(subtotal, jurisdiction).unwrap();
        let rates = jurisdiction.rates().unwrap();

        if rates.uses_hst() {
            prop_assert_eq!(breakdown.gst, Decimal::ZERO);
            prop_assert_eq!(breakdown.pst, Decimal::ZERO);
        } else {
            prop_assert_eq!(breakdown.hst, Decimal::ZERO);
        }
    }

    #[test]
    fn test_grand_total_is_subtotal_plus_tax(subtotal in cents(), jurisdiction in any_jurisdiction()) {
        let breakdown = TaxCalculator::new().calculate_tax(subtotal, jurisdiction).unwrap();

        prop_assert_eq!(breakdown.subtotal, subtotal);
        prop_assert_eq!(breakdown.grand_total, breakdown.subtotal + breakdown.tax_amount);
    }

    #[test]
    fn test_components_sum_to_tax_amount(subtotal in cents(), jurisdiction in any_jurisdiction()) {
        let breakdown = TaxCalculator::new().calculate_tax(subtotal, jurisdiction).unwrap();
        let rates = jurisdiction.rates().unwrap();
        let components = breakdown.gst + breakdown.pst + breakdown.hst;

        if rates.uses_hst() || rates.pst_rate.is_zero() {
            prop_assert_eq!(components, breakdown.tax_amount);
        } else {
            // Each field is rounded on its own
            prop_assert!((components - breakdown.tax_amount).abs() <= dec!(0.01));
        }
    }

    #[test]
    fn test_figures_have_cent_precision(subtotal in cents(), jurisdiction in any_jurisdiction()) {
        let breakdown = TaxCalculator::new().calculate_tax(subtotal, jurisdiction).unwrap();

        for value in [breakdown.gst, breakdown.pst, breakdown.hst, breakdown.tax_amount, breakdown.grand_total] {
            prop_assert!(value.scale() <= 2, "{} has more than two decimals", value);
        }
    }

    #[test]
    fn test_tax_sign_follows_subtotal(subtotal in cents(), jurisdiction in any_jurisdiction()) {
        let breakdown = TaxCalculator::new().calculate_tax(subtotal, jurisdiction).unwrap();

        if subtotal >= Decimal::ZERO {
            prop_assert!(breakdown.tax_amount >= Decimal::ZERO);
        } else {
            prop_assert!(breakdown.tax_amount <= Decimal::ZERO);
        }
    }
}

#[test]
fn test_reference_scenarios() {
    let calculator = TaxCalculator::new();

    let on = calculator.calculate_tax(dec!(100), Jurisdiction::ON).unwrap();
    assert_eq!(on.hst, dec!(13));
    assert_eq!(on.grand_total, dec!(113));
    assert_eq!(on.tax_breakdown_label, "HST 13.00%");

    let bc = calculator.calculate_tax(dec!(100), Jurisdiction::BC).unwrap();
    assert_eq!(bc.gst, dec!(5));
    assert_eq!(bc.pst, dec!(7));
    assert_eq!(bc.tax_amount, dec!(12));
    assert_eq!(bc.tax_breakdown_label, "GST 5.00% + PST 7.00%");

    let ab = calculator.calculate_tax(dec!(100), Jurisdiction::AB).unwrap();
    assert_eq!(ab.tax_amount, dec!(5));
    assert_eq!(ab.tax_breakdown_label, "GST 5.00%");
}

#[test]
fn test_quebec_qst() {
    let qc = TaxCalculator::new()
        .calculate_tax(dec!(10.01), Jurisdiction::QC)
        .unwrap();

    // 10.01 × 0.05 = 0.5005; 10.01 × 0.09975 = 0.9984975
    assert_eq!(qc.gst, dec!(0.50));
    assert_eq!(qc.pst, dec!(1.00));
    assert_eq!(qc.tax_amount, dec!(1.50));
    assert_eq!(qc.tax_breakdown_label, "GST 5.00% + PST 9.98%");
}

#[test]
fn test_zero_subtotal() {
    for jurisdiction in Jurisdiction::ALL {
        let breakdown = TaxCalculator::new()
            .calculate_tax(Decimal::ZERO, jurisdiction)
            .unwrap();
        assert_eq!(breakdown.tax_amount, Decimal::ZERO);
        assert_eq!(breakdown.grand_total, Decimal::ZERO);
    }
}

#[test]
fn test_unknown_jurisdiction() {
    assert!(matches!(lookup("XX"), Err(AppError::UnknownJurisdiction(_))));
    assert!(matches!(
        "ZZ".parse::<Jurisdiction>(),
        Err(AppError::UnknownJurisdiction(_))
    ));
}

#[test]
fn test_overflow_is_reported() {
    let result = TaxCalculator::new().calculate_tax(Decimal::MAX, Jurisdiction::ON);
    assert!(matches!(result, Err(AppError::Arithmetic(_))));
}
