use serde::{Deserialize, Serialize};

use super::currencies::{DEFAULT_CURRENCY, is_known_currency_code, minor_units};
use super::error::{TaxError, ValidationError};
use super::rounding::{DEFAULT_DECIMALS, MAX_DECIMALS};

/// Settings shared by the forward and reverse calculations.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// document such as `{"useWithholding": false}` is a complete configuration.
///
/// ```
/// use carmen_tax::TaxOptions;
///
/// let opts = TaxOptions::for_currency("JPY").use_withholding(false);
/// assert_eq!(opts.decimals, 0);
/// assert!(opts.use_vat);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaxOptions {
    /// ISO 4217 code echoed into the result.
    pub currency: String,
    /// Apply VAT. When false the VAT amount is zero whatever the rate.
    pub use_vat: bool,
    /// Apply withholding tax.
    pub use_withholding: bool,
    /// Fractional digits of every monetary output.
    pub decimals: u32,
}

impl Default for TaxOptions {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            use_vat: true,
            use_withholding: true,
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl TaxOptions {
    /// Options with the defaults: THB, VAT and withholding on, 2 decimals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for `code` with `decimals` taken from its ISO 4217 minor units.
    /// Unknown codes keep the default precision.
    pub fn for_currency(code: impl Into<String>) -> Self {
        let currency = code.into();
        let decimals = minor_units(&currency).unwrap_or(DEFAULT_DECIMALS);
        Self {
            currency,
            decimals,
            ..Self::default()
        }
    }

    /// Set the ISO 4217 code echoed into results.
    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into();
        self
    }

    /// Enable or disable VAT.
    pub fn use_vat(mut self, enabled: bool) -> Self {
        self.use_vat = enabled;
        self
    }

    /// Enable or disable withholding tax.
    pub fn use_withholding(mut self, enabled: bool) -> Self {
        self.use_withholding = enabled;
        self
    }

    /// Set the fractional digits of every monetary output.
    pub fn decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Check the settings a calculation cannot run with.
    pub(crate) fn check(&self) -> Result<(), TaxError> {
        if self.decimals > MAX_DECIMALS {
            return Err(TaxError::Config(format!(
                "decimals must be at most {MAX_DECIMALS}, got {}",
                self.decimals
            )));
        }
        Ok(())
    }

    /// Validate the options, returning all problems found.
    ///
    /// Calculations only require a usable precision; this additionally
    /// rejects currency codes outside the ISO 4217 table.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if !is_known_currency_code(&self.currency) {
            errors.push(ValidationError::new(
                "currency",
                format!("'{}' is not a known ISO 4217 code", self.currency),
            ));
        }
        if self.decimals > MAX_DECIMALS {
            errors.push(ValidationError::new(
                "decimals",
                format!("must be at most {MAX_DECIMALS}"),
            ));
        }
        errors
    }

    /// Parse options from a JSON document.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, TaxError> {
        Ok(serde_json::from_str(json)?)
    }
}
