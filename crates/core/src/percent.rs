//! Percentage values with fixed five-digit precision.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::allocation::{self, ResidualSlot};
use crate::error::MoneyError;
use crate::rounding::RoundingMode;

/// A percentage value; `Percent::from_value(dec!(100))` is 100%.
///
/// The value is rounded to [`Percent::PRECISION`] fractional digits with
/// half-away-from-zero at construction, so two percents compare equal iff
/// their rounded values are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent {
    value: Decimal,
}

impl Percent {
    /// Fractional digits kept by every percent value.
    pub const PRECISION: u32 = 5;

    /// Creates a percent from its percentage magnitude (100 means 100%).
    #[must_use]
    pub fn from_value(value: Decimal) -> Self {
        Self {
            value: RoundingMode::HalfAwayFromZero.round(value, Self::PRECISION),
        }
    }

    /// Creates a percent from a fraction (0.01 means 1%).
    #[must_use]
    pub fn from_fraction(fraction: Decimal) -> Self {
        Self::from_value(fraction * Decimal::ONE_HUNDRED)
    }

    /// The percentage magnitude.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.value
    }

    /// The derived fraction, `value / 100`. Not stored.
    #[must_use]
    pub fn fraction(self) -> Decimal {
        self.value / Decimal::ONE_HUNDRED
    }

    /// Splits this percent into `parts` values at five-digit precision whose
    /// sum is exactly this percent; the rounding drift lands in the last
    /// part.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidAllocationCount`] when `parts < 1`.
    pub fn divide_by(self, parts: i32) -> Result<Vec<Self>, MoneyError> {
        self.divide_by_dp(parts, Self::PRECISION)
    }

    /// Splits this percent at a caller-chosen precision.
    ///
    /// Precision above [`Percent::PRECISION`] would be lost to the
    /// constructor's rounding, so it is capped there.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidAllocationCount`] when `parts < 1`.
    pub fn divide_by_dp(self, parts: i32, decimal_places: u32) -> Result<Vec<Self>, MoneyError> {
        let decimal_places = decimal_places.min(Self::PRECISION);
        let shares = allocation::allocate_amount(
            self.value,
            parts,
            decimal_places,
            RoundingMode::HalfAwayFromZero,
            ResidualSlot::Last,
        )?;
        Ok(shares.into_iter().map(Self::from_value).collect())
    }

    /// Renders the value with the given number of fractional digits and a
    /// " %" suffix, e.g. `"33.33 %"`.
    #[must_use]
    pub fn format(self, decimal_places: usize) -> String {
        format!("{:.decimal_places$} %", self.value)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5} %", self.value)
    }
}

impl Add for Percent {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_value(self.value + rhs.value)
    }
}

impl Sub for Percent {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_value(self.value - rhs.value)
    }
}

impl Mul<Decimal> for Percent {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self::from_value(self.value * rhs)
    }
}

impl Mul<Percent> for Decimal {
    type Output = Percent;

    fn mul(self, rhs: Percent) -> Percent {
        rhs * self
    }
}
