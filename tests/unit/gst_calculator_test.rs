// Property-based tests for the pricing calculator
//
// - Profit margin is selling minus cost, with no floor
// - GST split halves are equal and recombine to the gross amount
// - The standard 18% split of ₹12,000 matches the printed invoice figures

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use retailops::core::currency::format_inr_f64;
use retailops::pricing::{compute_profit_margin, GstCalculator};

proptest! {
    #[test]
    fn test_margin_is_selling_minus_cost(
        cost in 0i64..10_000_000i64,
        selling in 1i64..10_000_000i64,
        cost_paise in 0u32..100u32
    ) {
        let cost = Decimal::from(cost) + Decimal::new(cost_paise as i64, 2);
        let selling = Decimal::from(selling);

        let margin = compute_profit_margin(cost, selling);

        prop_assert_eq!(margin, selling - cost);
        prop_assert_eq!(margin + cost, selling);
    }

    #[test]
    fn test_gst_halves_are_equal(gross in 1u64..100_000_000u64) {
        let breakdown = GstCalculator::new().split_inclusive(Decimal::from(gross));

        prop_assert_eq!(breakdown.sgst, breakdown.cgst);
        prop_assert_eq!(breakdown.total_gst, breakdown.sgst + breakdown.cgst);
    }

    #[test]
    fn test_gst_split_recombines_to_gross(gross in 1u64..100_000_000u64) {
        let breakdown = GstCalculator::new().split_inclusive(Decimal::from(gross));
        let gross = gross as f64;

        prop_assert!((breakdown.gross() - gross).abs() <= gross * 1e-12);
        prop_assert!(breakdown.subtotal < gross);
        prop_assert!(breakdown.total_gst > 0.0);
    }
}

#[test]
fn test_loss_making_sale_has_negative_margin() {
    assert_eq!(compute_profit_margin(dec!(15000), dec!(12000)), dec!(-3000));
    assert_eq!(compute_profit_margin(dec!(12000), dec!(12000)), Decimal::ZERO);
}

#[test]
fn test_standard_invoice_figures() {
    let calculator = GstCalculator::new();
    let breakdown = calculator.split_inclusive(dec!(12000));

    assert_eq!(format_inr_f64(breakdown.subtotal), "10,169.49");
    assert_eq!(format_inr_f64(breakdown.sgst), "915.25");
    assert_eq!(format_inr_f64(breakdown.cgst), "915.25");
    assert_eq!(format_inr_f64(breakdown.gross()), "12,000.00");
    assert_eq!(calculator.half_rate_percent(), 9.0);
}

#[test]
fn test_custom_rate() {
    let breakdown = GstCalculator::with_rate(0.12).split_inclusive(dec!(1120));

    assert!((breakdown.subtotal - 1000.0).abs() < 1e-9);
    assert!((breakdown.sgst - 60.0).abs() < 1e-9);
}
