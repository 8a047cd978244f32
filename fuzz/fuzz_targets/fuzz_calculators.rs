#![no_main]

use carmen_tax::*;
use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fn decimal(n: i64, scale: u8) -> Decimal {
    Decimal::new(n, u32::from(scale) % 29)
}

fuzz_target!(|input: ((i64, u8), (i64, u8), (i64, u8), bool, bool, u8)| {
    let ((a, sa), (v, sv), (w, sw), use_vat, use_withholding, dp) = input;
    let amount = decimal(a, sa);
    let vat_rate = decimal(v, sv);
    let withholding_rate = decimal(w, sw);
    let opts = TaxOptions::new()
        .use_vat(use_vat)
        .use_withholding(use_withholding)
        .decimals(u32::from(dp));

    // Must not panic — errors are fine, panics are bugs.
    let _ = calculate_tax_with(amount, vat_rate, withholding_rate, &opts);
    let _ = calculate_reverse_tax_with(amount, vat_rate, withholding_rate, &opts);
    let _ = calculate_taxes(amount, vat_rate, withholding_rate, use_vat);
    let _ = round_to_decimals(amount, u32::from(dp));
});
