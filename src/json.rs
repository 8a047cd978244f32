//! JSON interchange for breakdowns and options.
//!
//! Field names are camelCase and decimals are strings, matching what the
//! purchase-order and goods-received forms send and render.

use serde::Serialize;

use crate::core::TaxError;

/// Pretty-print any breakdown or options value as JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TaxError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TaxOptions;

    #[test]
    fn options_roundtrip() {
        let opts = TaxOptions::for_currency("VND").use_withholding(false);
        let json = to_json(&opts).unwrap();
        assert!(json.contains("\"useWithholding\": false"));
        assert_eq!(TaxOptions::from_json(&json).unwrap(), opts);
    }

    #[test]
    fn partial_options_fill_defaults() {
        let opts = TaxOptions::from_json(r#"{"useVat": false}"#).unwrap();
        assert!(!opts.use_vat);
        assert!(opts.use_withholding);
        assert_eq!(opts.currency, "THB");
        assert_eq!(opts.decimals, 2);
    }

    #[test]
    fn malformed_options() {
        let err = TaxOptions::from_json("{\"decimals\": \"two\"}").unwrap_err();
        assert!(matches!(err, TaxError::Json(_)));
    }
}
