//! VAT and withholding-tax calculators.
//!
//! Three entry points share this module:
//!
//! - [`calculate_tax`]: forward, from a pre-VAT base. Withholding is taken on
//!   base + VAT.
//! - [`calculate_reverse_tax`]: backward, from a VAT-inclusive total.
//!   Withholding is taken on the inclusive total.
//! - [`calculate_taxes`]: VAT inclusion as a toggle on the entered amount.
//!   Withholding is taken on the pre-VAT price.
//!
//! The withholding bases differ on purpose and callers depend on each of
//! them, so `calculate_reverse_tax(1070, 7, 3)` and
//! `calculate_taxes(1070, 7, 3, true)` disagree on the withholding amount.
//!
//! # Example
//!
//! ```
//! use carmen_tax::tax::*;
//! use rust_decimal_macros::dec;
//!
//! let r = calculate_tax(dec!(1000), dec!(7), dec!(3)).unwrap();
//! assert_eq!(r.vat_amount, dec!(70));
//! assert_eq!(r.withholding_amount, dec!(32.10));
//! assert_eq!(r.net_transfer_amount, dec!(1037.90));
//! ```

mod forward;
mod inclusive;
mod reverse;

pub use forward::{calculate_tax, calculate_tax_with};
pub use inclusive::calculate_taxes;
pub use reverse::{calculate_reverse_tax, calculate_reverse_tax_with};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::TaxError;

/// `base * rate / 100`.
fn percent_of(base: Decimal, rate: Decimal) -> Result<Decimal, TaxError> {
    base.checked_mul(rate)
        .and_then(|v| v.checked_div(dec!(100)))
        .ok_or_else(|| TaxError::Arithmetic(format!("{rate}% of {base} overflows")))
}

/// `amount / (1 + rate/100)`: strip VAT from an inclusive amount.
fn strip_vat(amount: Decimal, rate: Decimal) -> Result<Decimal, TaxError> {
    let divisor = rate
        .checked_div(dec!(100))
        .and_then(|r| r.checked_add(Decimal::ONE))
        .ok_or_else(|| TaxError::Arithmetic(format!("VAT rate {rate} overflows")))?;
    if divisor.is_zero() {
        return Err(TaxError::Arithmetic(format!(
            "cannot remove {rate}% VAT from {amount}: divisor is zero"
        )));
    }
    amount
        .checked_div(divisor)
        .ok_or_else(|| TaxError::Arithmetic(format!("{amount} / {divisor} overflows")))
}

fn add(a: Decimal, b: Decimal) -> Result<Decimal, TaxError> {
    a.checked_add(b)
        .ok_or_else(|| TaxError::Arithmetic(format!("{a} + {b} overflows")))
}

fn sub(a: Decimal, b: Decimal) -> Result<Decimal, TaxError> {
    a.checked_sub(b)
        .ok_or_else(|| TaxError::Arithmetic(format!("{a} - {b} overflows")))
}
