use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::currencies::is_known_currency_code;
use super::error::ValidationError;

/// Validate raw calculator inputs as entered on a purchase or goods-received form.
/// Returns all validation errors found (not just the first).
///
/// The calculators accept any input; callers that want to reject nonsense
/// before showing a breakdown run this first.
pub fn validate_tax_input(
    amount: Decimal,
    vat_rate: Decimal,
    withholding_rate: Decimal,
    currency: &str,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if amount.is_sign_negative() && !amount.is_zero() {
        errors.push(ValidationError::new("amount", "must not be negative"));
    }

    validate_rate(vat_rate, "vat_rate", &mut errors);
    validate_rate(withholding_rate, "withholding_rate", &mut errors);
    validate_currency(currency, &mut errors);

    errors
}

fn validate_rate(rate: Decimal, field: &str, errors: &mut Vec<ValidationError>) {
    if rate < Decimal::ZERO || rate > dec!(100) {
        errors.push(ValidationError::new(
            field,
            format!("rate {rate} must be between 0 and 100 percent"),
        ));
    }
}

fn validate_currency(currency: &str, errors: &mut Vec<ValidationError>) {
    if currency.trim().is_empty() {
        errors.push(ValidationError::new(
            "currency",
            "currency code must not be empty",
        ));
    } else if !currency.is_ascii() || currency.len() != 3 {
        errors.push(ValidationError::new(
            "currency",
            "currency code must be 3 ASCII letters (ISO 4217)",
        ));
    } else if !is_known_currency_code(currency) {
        errors.push(ValidationError::new(
            "currency",
            format!("currency code '{currency}' is not a known ISO 4217 code"),
        ));
    }
}
