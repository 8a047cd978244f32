use rust_decimal::Decimal;

use super::{add, percent_of, sub};
use crate::core::{TaxCalculationResult, TaxError, TaxOptions, try_round_to_decimals};

/// Forward calculation with default options (THB, VAT and withholding on,
/// 2 decimals).
pub fn calculate_tax(
    amount: Decimal,
    vat_rate: Decimal,
    withholding_rate: Decimal,
) -> Result<TaxCalculationResult, TaxError> {
    calculate_tax_with(amount, vat_rate, withholding_rate, &TaxOptions::default())
}

/// Compute VAT and withholding from a pre-VAT `amount`.
///
/// - VAT = amount × vat_rate / 100
/// - withholding = (amount + VAT) × withholding_rate / 100
/// - net transfer = amount + VAT − withholding
///
/// Rounding happens once, on the outputs. Inputs are not range-checked:
/// negative amounts and rates are computed as given. An output too large to
/// carry `options.decimals` fractional digits returns [`TaxError::Config`].
pub fn calculate_tax_with(
    amount: Decimal,
    vat_rate: Decimal,
    withholding_rate: Decimal,
    options: &TaxOptions,
) -> Result<TaxCalculationResult, TaxError> {
    options.check()?;

    let vat_amount = if options.use_vat {
        percent_of(amount, vat_rate)?
    } else {
        Decimal::ZERO
    };

    let withholding_amount = if options.use_withholding {
        percent_of(add(amount, vat_amount)?, withholding_rate)?
    } else {
        Decimal::ZERO
    };

    let net_transfer_amount = sub(add(amount, vat_amount)?, withholding_amount)?;

    let dp = options.decimals;
    let result = TaxCalculationResult {
        original_amount: try_round_to_decimals(amount, dp)?,
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
        %amount,
        %vat_rate,
        %withholding_rate,
        currency = %result.currency,
        net = %result.net_transfer_amount,
        "calculated forward tax"
    );

    Ok(result)
}
