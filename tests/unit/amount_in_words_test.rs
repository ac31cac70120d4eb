// Amount-in-words and rupee formatting as printed on tax invoices

use rust_decimal_macros::dec;

use retailops::core::currency::{amount_in_words, format_inr, format_inr_fixed};

#[test]
fn test_typical_phone_prices() {
    assert_eq!(amount_in_words(dec!(12000)), "Twelve Thousand Rupees only");
    assert_eq!(
        amount_in_words(dec!(59999)),
        "Fifty Nine Thousand Nine Hundred and Ninety Nine Rupees only"
    );
    assert_eq!(
        amount_in_words(dec!(149900)),
        "One Lakh Forty Nine Thousand Nine Hundred Rupees only"
    );
}

#[test]
fn test_scale_boundaries() {
    assert_eq!(amount_in_words(dec!(1)), "One Rupees only");
    assert_eq!(amount_in_words(dec!(100)), "One Hundred Rupees only");
    assert_eq!(amount_in_words(dec!(1000)), "One Thousand Rupees only");
    assert_eq!(amount_in_words(dec!(99999)), "Ninety Nine Thousand Nine Hundred and Ninety Nine Rupees only");
    assert_eq!(amount_in_words(dec!(250000000)), "Twenty Five Crore Rupees only");
}

#[test]
fn test_below_one_rupee_is_zero() {
    assert_eq!(amount_in_words(dec!(0)), "Zero");
    assert_eq!(amount_in_words(dec!(0.99)), "Zero");
}

#[test]
fn test_paise_are_dropped_from_words() {
    assert_eq!(amount_in_words(dec!(1500.75)), "One Thousand Five Hundred Rupees only");
}

#[test]
fn test_rupee_grouping() {
    assert_eq!(format_inr(dec!(6000)), "6,000");
    assert_eq!(format_inr(dec!(600)), "600");
    assert_eq!(format_inr(dec!(1234567)), "12,34,567");
    assert_eq!(format_inr_fixed(dec!(0), 2), "0.00");
    assert_eq!(format_inr_fixed(dec!(149900), 2), "1,49,900.00");
}
