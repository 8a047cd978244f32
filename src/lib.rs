//! # carmen-tax
//!
//! VAT and withholding-tax arithmetic for the Carmen hospitality ERP.
//! Computes the breakdowns shown on purchase orders and goods-received
//! notes: forward from a net price, backward from a VAT-inclusive total,
//! and with VAT inclusion as a toggle.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Every calculation is a pure function; nothing is cached or shared.
//!
//! ## Quick Start
//!
//! ```rust
//! use carmen_tax::*;
//! use rust_decimal_macros::dec;
//!
//! // 1,000 THB net, 7% VAT, 3% withholding
//! let fwd = calculate_tax(dec!(1000), dec!(7), dec!(3)).unwrap();
//! assert_eq!(fwd.net_transfer_amount, dec!(1037.90));
//!
//! // 1,070 THB gross
//! let rev = calculate_reverse_tax(dec!(1070), dec!(7), dec!(3)).unwrap();
//! assert_eq!(rev.breakdown.original_amount, dec!(1000.00));
//!
//! // USD, no withholding
//! let opts = TaxOptions::for_currency("USD").use_withholding(false);
//! let usd = calculate_tax_with(dec!(19.99), dec!(10), dec!(3), &opts).unwrap();
//! assert_eq!(usd.net_transfer_amount, dec!(21.99));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Result types, options, rounding, validation, calculators |
//! | `json` | JSON interchange (`to_json`, `TaxOptions::from_json`) |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod tax;

#[cfg(feature = "json")]
pub mod json;

// Re-export core types and calculators at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
#[cfg(feature = "core")]
pub use crate::tax::*;
