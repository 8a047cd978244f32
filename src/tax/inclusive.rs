use rust_decimal::Decimal;

use super::{add, percent_of, strip_vat, sub};
use crate::core::{DEFAULT_DECIMALS, TaxCalculationResults, TaxError, try_round_to_decimals};

/// Compute a breakdown where `is_vat_inclusive` says whether `amount`
/// already contains VAT.
///
/// Withholding is always taken on the pre-VAT price, whichever way the
/// amount was entered. Outputs are rounded to two decimals.
///
/// ```
/// use carmen_tax::tax::calculate_taxes;
/// use rust_decimal_macros::dec;
///
/// let r = calculate_taxes(dec!(1070), dec!(7), dec!(3), true).unwrap();
/// assert_eq!(r.price_before_vat, dec!(1000));
/// assert_eq!(r.withholding_amount, dec!(30));
/// assert_eq!(r.final_amount, dec!(1040));
/// ```
pub fn calculate_taxes(
    amount: Decimal,
    vat_rate: Decimal,
    withholding_rate: Decimal,
    is_vat_inclusive: bool,
) -> Result<TaxCalculationResults, TaxError> {
    let (price_before_vat, vat_amount) = if is_vat_inclusive {
        let net = strip_vat(amount, vat_rate)?;
        (net, sub(amount, net)?)
    } else {
        (amount, percent_of(amount, vat_rate)?)
    };

    let withholding_amount = percent_of(price_before_vat, withholding_rate)?;
    let final_amount = sub(add(price_before_vat, vat_amount)?, withholding_amount)?;

    let dp = DEFAULT_DECIMALS;
    let result = TaxCalculationResults {
        original_price: try_round_to_decimals(amount, dp)?,
        vat_amount: try_round_to_decimals(vat_amount, dp)?,
        withholding_amount: try_round_to_decimals(withholding_amount, dp)?,
        final_amount: try_round_to_decimals(final_amount, dp)?,
        price_before_vat: try_round_to_decimals(price_before_vat, dp)?,
    };

    tracing::debug!(
        %amount,
        %vat_rate,
        %withholding_rate,
        is_vat_inclusive,
        final_amount = %result.final_amount,
        "calculated taxes"
    );

    Ok(result)
}
