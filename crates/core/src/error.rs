//! Error types for monetary operations.
//!
//! All failures here are terminal programmer or input errors: either the
//! full correct value is produced, or one of these is returned. Nothing is
//! retryable and no partial results exist.

use thiserror::Error;

/// Errors that can occur during money and percent arithmetic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// An arithmetic operand was absent.
    #[error("Money cannot be null")]
    MissingOperand,

    /// Addition or subtraction attempted across different currencies.
    #[error("Cannot perform operation between {left} and {right}")]
    CurrencyMismatch {
        /// Currency code of the left operand.
        left: String,
        /// Currency code of the right operand.
        right: String,
    },

    /// Allocation requested with fewer than one part.
    #[error("Money cannot be allocated in {parts} parts")]
    InvalidAllocationCount {
        /// The rejected part count.
        parts: i32,
    },

    /// Ratio requested against a zero amount.
    #[error("Cannot divide by zero money amount")]
    DivisionByZero,
}

impl MoneyError {
    /// Returns the machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingOperand => "MISSING_OPERAND",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::InvalidAllocationCount { .. } => "INVALID_ALLOCATION_COUNT",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
        }
    }
}
