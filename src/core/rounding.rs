//! Final-step rounding of monetary outputs.

use rust_decimal::{Decimal, RoundingStrategy};

use super::error::TaxError;

/// Fractional digits used when no precision is configured.
pub const DEFAULT_DECIMALS: u32 = 2;

/// Largest scale a [`Decimal`] can carry.
pub const MAX_DECIMALS: u32 = 28;

/// Round `value` to `decimals` fractional digits, ties toward positive infinity.
///
/// This is `floor(value * 10^decimals + 0.5) / 10^decimals`: `2.5` rounds to
/// `3` and `-2.5` rounds to `-2`. The result is padded to `decimals`
/// fractional digits (`70` becomes `70.00`) and a rounded zero is never
/// negative.
///
/// `decimals` is clamped to [`MAX_DECIMALS`]. A value too large to carry
/// that many digits in the 96-bit mantissa comes back with fewer; use
/// [`try_round_to_decimals`] to treat that as an error.
///
/// ```
/// use carmen_tax::round_to_decimals;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_to_decimals(dec!(32.105), 2).to_string(), "32.11");
/// assert_eq!(round_to_decimals(dec!(-32.105), 2).to_string(), "-32.10");
/// assert_eq!(round_to_decimals(dec!(70), 2).to_string(), "70.00");
/// ```
pub fn round_to_decimals(value: Decimal, decimals: u32) -> Decimal {
    let decimals = decimals.min(MAX_DECIMALS);
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    let mut rounded = value.round_dp_with_strategy(decimals, strategy);
    rounded.rescale(decimals);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

/// [`round_to_decimals`] that fails unless the result carries exactly
/// `decimals` fractional digits.
///
/// ```
/// use carmen_tax::{MAX_DECIMALS, try_round_to_decimals};
/// use rust_decimal_macros::dec;
///
/// assert_eq!(try_round_to_decimals(dec!(1), MAX_DECIMALS).unwrap().scale(), 28);
/// assert!(try_round_to_decimals(dec!(1037.9), MAX_DECIMALS).is_err());
/// ```
pub fn try_round_to_decimals(value: Decimal, decimals: u32) -> Result<Decimal, TaxError> {
    let rounded = round_to_decimals(value, decimals);
    if rounded.scale() != decimals {
        return Err(TaxError::Config(format!(
            "{value} cannot be represented with {decimals} decimal places"
        )));
    }
    Ok(rounded)
}

/// [`round_to_decimals`] with [`DEFAULT_DECIMALS`].
pub fn round_money(value: Decimal) -> Decimal {
    round_to_decimals(value, DEFAULT_DECIMALS)
}
