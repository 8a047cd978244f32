use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Breakdown produced by the forward calculation (base amount known).
///
/// Monetary fields are rounded to the configured precision; rates are
/// percentages (0–100 scale) echoed back as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxCalculationResult {
    /// Pre-VAT base amount.
    pub original_amount: Decimal,
    /// VAT charged on the base.
    pub vat_amount: Decimal,
    /// Withholding tax deducted from the payment.
    pub withholding_amount: Decimal,
    /// Cash actually transferred: base + VAT - withholding.
    pub net_transfer_amount: Decimal,
    /// VAT rate in percent.
    pub vat_rate: Decimal,
    /// Withholding rate in percent.
    pub withholding_rate: Decimal,
    /// ISO 4217 currency code the amounts are expressed in.
    pub currency: String,
    /// Whether VAT was applied.
    pub use_vat: bool,
    /// Whether withholding tax was applied.
    pub use_withholding: bool,
}

/// Breakdown produced by back-calculating from a VAT-inclusive amount.
///
/// Serializes flat: the fields of [`TaxCalculationResult`] followed by
/// `isReverseCalculation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseTaxCalculationResult {
    #[serde(flatten)]
    pub breakdown: TaxCalculationResult,
    /// Always `true`; marks the breakdown as derived from a gross amount.
    pub is_reverse_calculation: bool,
}

/// Breakdown produced by [`calculate_taxes`](crate::tax::calculate_taxes),
/// where VAT inclusion is a toggle on the entered amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxCalculationResults {
    /// The amount as entered.
    pub original_price: Decimal,
    pub vat_amount: Decimal,
    /// Withholding on the pre-VAT price.
    pub withholding_amount: Decimal,
    /// price_before_vat + vat_amount - withholding_amount.
    pub final_amount: Decimal,
    pub price_before_vat: Decimal,
}
