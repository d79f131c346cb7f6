//! Currency conversion through a rate repository.

use moneta_core::{Currency, Money};

use crate::error::RateError;
use crate::repository::RateRepository;

/// Converts money between currencies using rates from a repository.
///
/// The converter owns its repository; rates are registered through
/// [`CurrencyConverter::repository_mut`] and conversion itself never
/// mutates anything.
#[derive(Debug, Default)]
pub struct CurrencyConverter<R> {
    repository: R,
}

impl<R: RateRepository> CurrencyConverter<R> {
    /// Creates a converter over the given repository.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Read access to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Mutable access to the underlying repository, for registering rates.
    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }

    /// Converts `money` into the target currency, rounding the product to
    /// the target's minor unit.
    ///
    /// Converting into the money's own currency returns it unchanged; no
    /// self-rate needs to be registered.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::RateNotFound`] when no rate is registered for
    /// the (source, target) pair.
    pub fn convert(&self, money: &Money, target: &Currency) -> Result<Money, RateError> {
        if money.currency() == target {
            return Ok(money.clone());
        }

        let rate = self.repository.get(money.currency(), target).ok_or_else(|| {
            RateError::RateNotFound {
                from: money.currency().code.to_string(),
                to: target.code.to_string(),
            }
        })?;

        tracing::debug!(
            source = %money.currency(),
            target = %target,
            rate = %rate.rate(),
            "converting amount"
        );
        Ok(Money::create(money.amount() * rate.rate(), target.clone()))
    }
}
