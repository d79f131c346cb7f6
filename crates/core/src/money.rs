//! Monetary amounts tied to a currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts wrap `rust_decimal::Decimal` and are rounded to the currency's
//! minor unit at construction, so a [`Money`] never holds an un-rounded
//! amount. The one documented exception is scalar multiplication, which
//! carries the raw product through (see [`Money::scale`]).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::allocation::{self, ResidualSlot};
use crate::currency::Currency;
use crate::error::MoneyError;
use crate::percent::Percent;
use crate::rounding::RoundingMode;

/// An immutable amount of money in a specific [`Currency`].
///
/// Construction is factory-only and rounds the amount to `decimal_places`
/// (the currency's minor-unit count unless overridden) using the chosen
/// [`RoundingMode`]. Every arithmetic operation returns a new instance.
///
/// Two amounts are equal iff amount, currency, and decimal places all
/// match; the rounding mode does not participate in equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
    decimal_places: u32,
    rounding: RoundingMode,
}

impl Money {
    /// Creates an amount rounded to the currency's minor unit with
    /// half-away-from-zero.
    #[must_use]
    pub fn create(amount: Decimal, currency: Currency) -> Self {
        Self::create_with(amount, currency, RoundingMode::default())
    }

    /// Creates an amount rounded with an explicit rounding mode.
    #[must_use]
    pub fn create_with(amount: Decimal, currency: Currency, rounding: RoundingMode) -> Self {
        let decimal_places = currency.decimals;
        Self {
            amount: rounding.round(amount, decimal_places),
            currency,
            decimal_places,
            rounding,
        }
    }

    /// Creates an amount at a custom minor-unit resolution instead of the
    /// currency default.
    #[must_use]
    pub fn with_precision(
        amount: Decimal,
        currency: Currency,
        decimal_places: u32,
        rounding: RoundingMode,
    ) -> Self {
        Self {
            amount: rounding.round(amount, decimal_places),
            currency,
            decimal_places,
            rounding,
        }
    }

    /// Brazilian reais.
    #[must_use]
    pub fn reais(amount: Decimal) -> Self {
        Self::create(amount, Currency::BRL)
    }

    /// US dollars.
    #[must_use]
    pub fn dollars(amount: Decimal) -> Self {
        Self::create(amount, Currency::USD)
    }

    /// Euros.
    #[must_use]
    pub fn euros(amount: Decimal) -> Self {
        Self::create(amount, Currency::EUR)
    }

    /// Bitcoins.
    #[must_use]
    pub fn bitcoins(amount: Decimal) -> Self {
        Self::create(amount, Currency::BTC)
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self::create(Decimal::ZERO, currency)
    }

    /// The amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Number of minor-unit digits this amount is kept at.
    #[must_use]
    pub const fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// The rounding mode applied at construction.
    #[must_use]
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// The atomic increment at this amount's resolution, `10^-decimal_places`.
    #[must_use]
    pub fn smallest_amount(&self) -> Decimal {
        Decimal::new(1, self.decimal_places)
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Adds two amounts of the same currency.
    ///
    /// The result carries the left operand's currency, precision, and
    /// rounding mode. Both operands are already at that precision, so no
    /// re-rounding happens.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] when the currencies differ.
    pub fn try_add(&self, other: &Self) -> Result<Self, MoneyError> {
        self.check_currency(other)?;
        Ok(self.with_amount(self.amount + other.amount))
    }

    /// Subtracts an amount of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] when the currencies differ.
    pub fn try_subtract(&self, other: &Self) -> Result<Self, MoneyError> {
        self.check_currency(other)?;
        Ok(self.with_amount(self.amount - other.amount))
    }

    /// Adds two optional amounts, failing when either operand is absent.
    ///
    /// Absence is distinct from a zero amount: `None` means there is no
    /// operand at all.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::MissingOperand`] when either operand is `None`,
    /// or [`MoneyError::CurrencyMismatch`] when the currencies differ.
    pub fn add_optional(lhs: Option<&Self>, rhs: Option<&Self>) -> Result<Self, MoneyError> {
        match (lhs, rhs) {
            (Some(a), Some(b)) => a.try_add(b),
            _ => Err(MoneyError::MissingOperand),
        }
    }

    /// Subtracts two optional amounts, failing when either operand is
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::MissingOperand`] when either operand is `None`,
    /// or [`MoneyError::CurrencyMismatch`] when the currencies differ.
    pub fn subtract_optional(lhs: Option<&Self>, rhs: Option<&Self>) -> Result<Self, MoneyError> {
        match (lhs, rhs) {
            (Some(a), Some(b)) => a.try_subtract(b),
            _ => Err(MoneyError::MissingOperand),
        }
    }

    /// Multiplies by a scalar WITHOUT re-rounding.
    ///
    /// The raw product is carried through even when it has more fractional
    /// digits than the currency keeps: `1.046 * 1 == 1.046`. Only
    /// construction and percent multiplication round.
    #[must_use]
    pub fn scale(&self, factor: Decimal) -> Self {
        self.with_amount(self.amount * factor)
    }

    /// Returns the given percentage of this amount.
    ///
    /// The product is truncated toward zero at this amount's precision
    /// regardless of the configured rounding mode: `10.129 * 100% == 10.12`.
    /// Fee calculations depend on this truncation at the penny level.
    #[must_use]
    pub fn percent_of(&self, percent: Percent) -> Self {
        let product = self.amount * percent.fraction();
        self.with_amount(RoundingMode::TowardZero.round(product, self.decimal_places))
    }

    /// The ratio between two amounts of the same currency, as a percent.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] when the currencies differ,
    /// or [`MoneyError::DivisionByZero`] when `other` is zero.
    pub fn ratio_of(&self, other: &Self) -> Result<Percent, MoneyError> {
        self.check_currency(other)?;
        if other.amount.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Percent::from_fraction(self.amount / other.amount))
    }

    /// Splits this amount into `parts` nearly equal amounts that sum
    /// exactly to it; the rounding drift lands in the last part.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidAllocationCount`] when `parts < 1`.
    pub fn allocate(&self, parts: i32) -> Result<Vec<Self>, MoneyError> {
        self.allocate_with(parts, ResidualSlot::default())
    }

    /// Splits this amount with the residual in the chosen slot.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidAllocationCount`] when `parts < 1`.
    pub fn allocate_with(&self, parts: i32, slot: ResidualSlot) -> Result<Vec<Self>, MoneyError> {
        let shares = allocation::allocate_amount(
            self.amount,
            parts,
            self.decimal_places,
            self.rounding,
            slot,
        )?;
        Ok(shares.into_iter().map(|amount| self.with_amount(amount)).collect())
    }

    /// Splits this amount by a list of percentages.
    ///
    /// The percentages are first normalized so they sum to exactly 100% -
    /// the last entry absorbs `100% - sum(others)` - then each normalized
    /// percent is applied through [`Money::percent_of`].
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidAllocationCount`] when `percents` is
    /// empty.
    pub fn allocate_by(&self, percents: &[Percent]) -> Result<Vec<Self>, MoneyError> {
        self.allocate_by_with(percents, ResidualSlot::default())
    }

    /// Splits this amount by percentages, normalizing the chosen slot.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidAllocationCount`] when `percents` is
    /// empty.
    pub fn allocate_by_with(
        &self,
        percents: &[Percent],
        slot: ResidualSlot,
    ) -> Result<Vec<Self>, MoneyError> {
        let normalized = allocation::normalize_percents(percents, slot)?;
        Ok(normalized.into_iter().map(|p| self.percent_of(p)).collect())
    }

    /// New instance with the same currency, precision, and rounding mode.
    fn with_amount(&self, amount: Decimal) -> Self {
        Self {
            amount,
            currency: self.currency.clone(),
            decimal_places: self.decimal_places,
            rounding: self.rounding,
        }
    }

    fn check_currency(&self, other: &Self) -> Result<(), MoneyError> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                left: self.currency.code.to_string(),
                right: other.currency.code.to_string(),
            })
        }
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount
            && self.currency == other.currency
            && self.decimal_places == other.decimal_places
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount.hash(state);
        self.currency.hash(state);
        self.decimal_places.hash(state);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            amount: -self.amount,
            ..self
        }
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Money> for Decimal {
    type Output = Money;

    fn mul(self, rhs: Money) -> Money {
        rhs.scale(self)
    }
}

impl Mul<Percent> for Money {
    type Output = Self;

    fn mul(self, rhs: Percent) -> Self::Output {
        self.percent_of(rhs)
    }
}

impl Add<Percent> for Money {
    type Output = Self;

    fn add(self, rhs: Percent) -> Self::Output {
        let part = self.percent_of(rhs);
        self.with_amount(self.amount + part.amount)
    }
}

impl Sub<Percent> for Money {
    type Output = Self;

    fn sub(self, rhs: Percent) -> Self::Output {
        let part = self.percent_of(rhs);
        self.with_amount(self.amount - part.amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.decimal_places as usize;
        if self.amount.is_sign_negative() {
            write!(f, "-{}{:.digits$}", self.currency.symbol, self.amount.abs())
        } else {
            write!(f, "{}{:.digits$}", self.currency.symbol, self.amount)
        }
    }
}
