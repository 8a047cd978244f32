use rust_decimal::Decimal;

use super::{percent_of, strip_vat, sub};
use crate::core::{
    ReverseTaxCalculationResult, TaxCalculationResult, TaxError, TaxOptions, try_round_to_decimals,
};

/// Reverse calculation with default options.
pub fn calculate_reverse_tax(
    amount_including_vat: Decimal,
    vat_rate: Decimal,
    withholding_rate: Decimal,
) -> Result<ReverseTaxCalculationResult, TaxError> {
    calculate_reverse_tax_with(
        amount_including_vat,
        vat_rate,
        withholding_rate,
        &TaxOptions::default(),
    )
}

/// Back-calculate the pre-VAT base from a VAT-inclusive amount.
///
/// - base = gross / (1 + vat_rate/100)
/// - VAT = base × vat_rate / 100, from the unrounded base
/// - withholding = gross × withholding_rate / 100
/// - net transfer = gross − withholding
///
/// Withholding is assessed on the gross amount here, unlike
/// [`calculate_tax`](super::calculate_tax), so the two are not inverses.
///
/// A VAT rate of −100% leaves nothing to divide by and returns
/// [`TaxError::Arithmetic`].
pub fn calculate_reverse_tax_with(
    amount_including_vat: Decimal,
    vat_rate: Decimal,
    withholding_rate: Decimal,
    options: &TaxOptions,
) -> Result<ReverseTaxCalculationResult, TaxError> {
    options.check()?;

    let (original_amount, vat_amount) = if options.use_vat {
        let base = strip_vat(amount_including_vat, vat_rate)?;
        (base, percent_of(base, vat_rate)?)
    } else {
        (amount_including_vat, Decimal::ZERO)
    };

    let withholding_amount = if options.use_withholding {
        percent_of(amount_including_vat, withholding_rate)?
    } else {
        Decimal::ZERO
    };

    let net_transfer_amount = sub(amount_including_vat, withholding_amount)?;

    let dp = options.decimals;
    let breakdown = TaxCalculationResult {
        original_amount: try_round_to_decimals(original_amount, dp)?,
        vat_amount: try_round_to_decimals(vat_amount, dp)?,
        withholding_amount: try_round_to_decimals(withholding_amount, dp)?,
        net_transfer_amount: try_round_to_decimals(net_transfer_amount, dp)?,
        vat_rate,
        withholding_rate,
        currency: options.currency.clone(),
        use_vat: options.use_vat,
        use_withholding: options.use_withholding,
    };

    tracing::debug!(
        gross = %amount_including_vat,
        %vat_rate,
        %withholding_rate,
        base = %breakdown.original_amount,
        net = %breakdown.net_transfer_amount,
        "calculated reverse tax"
    );

    Ok(ReverseTaxCalculationResult {
        breakdown,
        is_reverse_calculation: true,
    })
}
