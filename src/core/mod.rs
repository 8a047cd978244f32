//! Core types, options, rounding, and input validation.
//!
//! This module provides the value objects returned by the calculators in
//! [`crate::tax`] and the configuration they run with.

mod currencies;
mod error;
mod options;
mod rounding;
mod types;
mod validation;

pub use currencies::{DEFAULT_CURRENCY, is_known_currency_code, minor_units};
pub use error::*;
pub use options::*;
pub use rounding::*;
pub use types::*;
pub use validation::*;
