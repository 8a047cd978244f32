//! Inputs the calculators accept without validation, and the two outcomes
//! they refuse (division by zero and overflow).

#![cfg(feature = "core")]

use carmen_tax::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn zero_amount() {
    let r = calculate_tax(dec!(0), dec!(7), dec!(3)).unwrap();
    assert_eq!(r.net_transfer_amount, dec!(0));
    assert!(!r.net_transfer_amount.is_sign_negative());

    let r = calculate_reverse_tax(dec!(0), dec!(7), dec!(3)).unwrap();
    assert_eq!(r.breakdown.original_amount, dec!(0));
}

#[test]
fn credit_note_amounts_are_negative() {
    let r = calculate_reverse_tax(dec!(-1070), dec!(7), dec!(3)).unwrap();
    assert_eq!(r.breakdown.original_amount, dec!(-1000));
    assert_eq!(r.breakdown.vat_amount, dec!(-70));
    assert_eq!(r.breakdown.withholding_amount, dec!(-32.1));
    assert_eq!(r.breakdown.net_transfer_amount, dec!(-1037.9));
}

#[test]
fn negative_tie_rounds_toward_positive() {
    let r = calculate_tax(dec!(-0.06), dec!(0), dec!(10)).unwrap();
    assert_eq!(r.withholding_amount, dec!(-0.01));
    // -0.5 cents of withholding rounds up to zero
    let r = calculate_tax(dec!(-0.25), dec!(0), dec!(2)).unwrap();
    assert_eq!(r.withholding_amount, dec!(0));
    assert_eq!(r.withholding_amount.to_string(), "0.00");
}

#[test]
fn rates_above_hundred_percent() {
    let r = calculate_tax(dec!(100), dec!(150), dec!(0)).unwrap();
    assert_eq!(r.vat_amount, dec!(150));
    assert_eq!(r.net_transfer_amount, dec!(250));
}

#[test]
fn negative_vat_rate() {
    let r = calculate_reverse_tax(dec!(90), dec!(-10), dec!(0)).unwrap();
    assert_eq!(r.breakdown.original_amount, dec!(100));
    assert_eq!(r.breakdown.vat_amount, dec!(-10));
}

#[test]
fn minus_hundred_percent_vat_is_an_error() {
    let err = calculate_reverse_tax(dec!(100), dec!(-100), dec!(0)).unwrap_err();
    assert!(matches!(err, TaxError::Arithmetic(_)));
    assert!(calculate_taxes(dec!(100), dec!(-100), dec!(0), true).is_err());
    // forward never divides
    assert!(calculate_tax(dec!(100), dec!(-100), dec!(0)).is_ok());
}

#[test]
fn overflow_is_an_error() {
    assert!(calculate_tax(Decimal::MAX, dec!(7), dec!(0)).is_err());
    assert!(calculate_reverse_tax(Decimal::MAX, dec!(0), dec!(200)).is_err());
    assert!(calculate_taxes(Decimal::MAX, dec!(7), dec!(0), false).is_err());
}

#[test]
fn large_amounts_within_range() {
    let r = calculate_tax(dec!(1_000_000_000_000), dec!(7), dec!(3)).unwrap();
    assert_eq!(r.vat_amount, dec!(70_000_000_000));
    assert_eq!(r.net_transfer_amount, dec!(1_037_900_000_000));
}

#[test]
fn sub_cent_amounts() {
    let r = calculate_tax(dec!(0.004), dec!(7), dec!(3)).unwrap();
    assert_eq!(r.original_amount, dec!(0));
    assert_eq!(r.vat_amount, dec!(0));
    assert_eq!(r.net_transfer_amount, dec!(0));
}

#[test]
fn three_decimal_currency() {
    let opts = TaxOptions::for_currency("KWD");
    let r = calculate_tax_with(dec!(12.3456), dec!(5), dec!(0), &opts).unwrap();
    assert_eq!(r.original_amount.to_string(), "12.346");
    assert_eq!(r.vat_amount.to_string(), "0.617");
    assert_eq!(r.net_transfer_amount.to_string(), "12.963");
}

#[test]
fn max_precision_is_accepted() {
    let opts = TaxOptions::new().decimals(MAX_DECIMALS);
    let r = calculate_reverse_tax_with(dec!(1), dec!(7), dec!(0), &opts).unwrap();
    assert_eq!(r.breakdown.net_transfer_amount, dec!(1));
}

#[test]
fn max_precision_keeps_every_digit() {
    let opts = TaxOptions::new().decimals(MAX_DECIMALS);
    let r = calculate_tax_with(dec!(7), dec!(0), dec!(0), &opts).unwrap();
    assert_eq!(r.original_amount.scale(), MAX_DECIMALS);
    assert_eq!(r.net_transfer_amount.scale(), MAX_DECIMALS);
}

#[test]
fn precision_the_amount_cannot_carry_is_an_error() {
    let opts = TaxOptions::new().decimals(MAX_DECIMALS);
    let err = calculate_tax_with(dec!(1000), dec!(7), dec!(3), &opts).unwrap_err();
    assert!(matches!(err, TaxError::Config(_)));

    let err = calculate_reverse_tax_with(dec!(8), dec!(0), dec!(0), &opts).unwrap_err();
    assert!(matches!(err, TaxError::Config(_)));
}

#[test]
fn cents_on_huge_amounts_are_an_error() {
    let huge = dec!(70000000000000000000000000000);
    let err = calculate_taxes(huge, dec!(0), dec!(0), false).unwrap_err();
    assert!(matches!(err, TaxError::Config(_)));
    assert!(calculate_tax(huge, dec!(0), dec!(0)).is_err());
}

#[test]
fn unknown_currency_is_echoed() {
    let opts = TaxOptions::new().currency("XTS");
    let r = calculate_tax_with(dec!(1), dec!(7), dec!(3), &opts).unwrap();
    assert_eq!(r.currency, "XTS");
    assert_eq!(opts.validate().len(), 1);
}
