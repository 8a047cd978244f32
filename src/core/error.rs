use thiserror::Error;

/// Errors that can occur while computing a tax breakdown.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TaxError {
    /// The result is not representable as a decimal (division by zero, overflow).
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// Calculation options are out of range.
    #[error("configuration error: {0}")]
    Config(String),

    /// One or more input validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// JSON encoding or decoding failed.
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single field-level validation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the offending input (e.g. "vat_rate").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    /// Create a validation error for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Collapse a list of validation errors into a single [`TaxError::Validation`].
///
/// Returns `Ok(())` when the list is empty.
pub fn into_result(errors: Vec<ValidationError>) -> Result<(), TaxError> {
    if errors.is_empty() {
        return Ok(());
    }
    let msg = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    Err(TaxError::Validation(msg))
}
