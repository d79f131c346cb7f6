//! Exchange-rate storage behind a repository seam.

use std::collections::HashMap;

use moneta_core::Currency;

use crate::rate::ExchangeRate;

/// Registration and lookup of exchange rates, keyed by currency pair.
///
/// Implementations must be safe for concurrent reads; registration is the
/// only mutation and takes `&mut self`.
pub trait RateRepository {
    /// Stores `rate` under its (source, destination) pair, replacing any
    /// previously registered rate for that pair.
    fn register(&mut self, rate: ExchangeRate);

    /// The registered rate for (source, destination), if any.
    fn get(&self, source: &Currency, destination: &Currency) -> Option<ExchangeRate>;
}

/// In-memory rate table.
///
/// Rates are registered up front; lookups afterwards are read-only and the
/// table can be shared freely across threads.
#[derive(Debug, Default)]
pub struct InMemoryRateRepository {
    rates: HashMap<(String, String), ExchangeRate>,
}

impl InMemoryRateRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered rates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if no rates are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl RateRepository for InMemoryRateRepository {
    fn register(&mut self, rate: ExchangeRate) {
        tracing::debug!(
            source = %rate.source(),
            destination = %rate.destination(),
            rate = %rate.rate(),
            "registering exchange rate"
        );
        let key = (
            rate.source().code.to_string(),
            rate.destination().code.to_string(),
        );
        self.rates.insert(key, rate);
    }

    fn get(&self, source: &Currency, destination: &Currency) -> Option<ExchangeRate> {
        let key = (source.code.to_string(), destination.code.to_string());
        self.rates.get(&key).cloned()
    }
}
