//! Exchange rate records.

use moneta_core::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RateError;

/// Exchange rate between two currencies.
///
/// The rate is the multiplier taking one unit of the source currency to the
/// destination: 1 source = `rate` destination. Rates are validated positive
/// at construction, so the record is always safe to invert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    source: Currency,
    destination: Currency,
    rate: Decimal,
}

impl ExchangeRate {
    /// Creates a rate, rejecting non-positive multipliers.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::InvalidRate`] when `rate <= 0`.
    pub fn new(source: Currency, destination: Currency, rate: Decimal) -> Result<Self, RateError> {
        if rate <= Decimal::ZERO {
            return Err(RateError::InvalidRate);
        }
        Ok(Self {
            source,
            destination,
            rate,
        })
    }

    /// Source currency.
    #[must_use]
    pub const fn source(&self) -> &Currency {
        &self.source
    }

    /// Destination currency.
    #[must_use]
    pub const fn destination(&self) -> &Currency {
        &self.destination
    }

    /// The multiplier (1 source = `rate` destination).
    #[must_use]
    pub const fn rate(&self) -> Decimal {
        self.rate
    }

    /// Returns the inverse rate.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            source: self.destination.clone(),
            destination: self.source.clone(),
            rate: Decimal::ONE / self.rate,
        }
    }
}
