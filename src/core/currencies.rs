//! ISO 4217 currency codes and their minor units.
//!
//! Covers the Southeast Asian markets the hotels operate in plus the major
//! world currencies used by international suppliers.

/// Currency used when the caller does not name one.
pub const DEFAULT_CURRENCY: &str = "THB";

/// Check whether `code` is a known ISO 4217 currency code.
pub fn is_known_currency_code(code: &str) -> bool {
    minor_units(code).is_some()
}

/// Number of fractional digits (ISO 4217 minor units) for `code`.
///
/// Returns `None` for unknown codes. Lookup is case-sensitive.
pub fn minor_units(code: &str) -> Option<u32> {
    CURRENCIES
        .binary_search_by(|(c, _)| (*c).cmp(code))
        .ok()
        .map(|i| CURRENCIES[i].1)
}

/// (code, minor units), sorted by code for binary search.
static CURRENCIES: &[(&str, u32)] = &[
    ("AED", 2),
    ("AUD", 2),
    ("BHD", 3),
    ("BND", 2),
    ("CAD", 2),
    ("CHF", 2),
    ("CNY", 2),
    ("DKK", 2),
    ("EUR", 2),
    ("GBP", 2),
    ("HKD", 2),
    ("IDR", 2),
    ("INR", 2),
    ("JPY", 0),
    ("KHR", 2),
    ("KRW", 0),
    ("KWD", 3),
    ("LAK", 2),
    ("LKR", 2),
    ("MMK", 2),
    ("MOP", 2),
    ("MVR", 2),
    ("MYR", 2),
    ("NOK", 2),
    ("NZD", 2),
    ("OMR", 3),
    ("PHP", 2),
    ("QAR", 2),
    ("SAR", 2),
    ("SEK", 2),
    ("SGD", 2),
    ("THB", 2),
    ("TWD", 2),
    ("USD", 2),
    ("VND", 0),
    ("ZAR", 2),
];
