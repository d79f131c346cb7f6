//! Rounding modes for fixed-precision amounts.
//!
//! Every amount in this crate is kept at a fixed number of fractional
//! digits; this module names the tie-breaking rules used to get there and
//! maps them onto `rust_decimal`'s rounding strategies.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Tie-breaking rule applied when rounding an amount to a fixed precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round half away from zero (0.125 -> 0.13). The default for money
    /// construction.
    #[default]
    HalfAwayFromZero,
    /// Round half toward zero (0.125 -> 0.12).
    HalfTowardZero,
    /// Round half to the nearest even digit (banker's rounding).
    HalfToEven,
    /// Truncate toward zero (10.129 -> 10.12). Applied to every
    /// percent-multiplication regardless of the money's configured mode.
    TowardZero,
}

impl RoundingMode {
    /// The underlying `rust_decimal` strategy for this mode.
    #[must_use]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfTowardZero => RoundingStrategy::MidpointTowardZero,
            Self::HalfToEven => RoundingStrategy::MidpointNearestEven,
            Self::TowardZero => RoundingStrategy::ToZero,
        }
    }

    /// Rounds `value` to `decimal_places` fractional digits using this mode.
    #[must_use]
    pub fn round(self, value: Decimal, decimal_places: u32) -> Decimal {
        value.round_dp_with_strategy(decimal_places, self.strategy())
    }
}
