//! Error types for exchange-rate operations.

use thiserror::Error;

/// Errors that can occur during rate registration or conversion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RateError {
    /// No exchange rate registered for the currency pair.
    #[error("No exchange rate found for {from} to {to}")]
    RateNotFound {
        /// Source currency code.
        from: String,
        /// Target currency code.
        to: String,
    },

    /// Exchange rate must be positive.
    #[error("Exchange rate must be positive")]
    InvalidRate,
}

impl RateError {
    /// Returns the machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::RateNotFound { .. } => "RATE_NOT_FOUND",
            Self::InvalidRate => "INVALID_RATE",
        }
    }
}
