//! Sum-preserving allocation of decimal quantities.
//!
//! Splitting a rounded quantity into N individually rounded parts loses or
//! creates value unless the rounding drift is put back somewhere. The
//! allocator here rounds one equal share, then folds the entire residual
//! into a single designated slot:
//!
//! 1. `share = round(total / parts, precision)`
//! 2. `residual = total - parts * share`
//! 3. every slot gets `share`; the designated slot gets `share + residual`
//!
//! The outputs therefore sum EXACTLY to the input, however poorly
//! `total / parts` divides. Both [`Money`](crate::Money) and
//! [`Percent`](crate::Percent) allocate through this module.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::MoneyError;
use crate::percent::Percent;
use crate::rounding::RoundingMode;

/// Which slot absorbs the rounding residual of an allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResidualSlot {
    /// The first part receives `share + residual`.
    First,
    /// The last part receives `share + residual`. The default.
    #[default]
    Last,
}

/// Splits `total` into `parts` shares rounded to `decimal_places` with
/// `mode`, folding the rounding residual into the slot chosen by `slot`.
///
/// The returned shares sum exactly to `total`.
///
/// # Errors
///
/// Returns [`MoneyError::InvalidAllocationCount`] when `parts < 1`.
pub fn allocate_amount(
    total: Decimal,
    parts: i32,
    decimal_places: u32,
    mode: RoundingMode,
    slot: ResidualSlot,
) -> Result<Vec<Decimal>, MoneyError> {
    let len = usize::try_from(parts)
        .ok()
        .filter(|&n| n >= 1)
        .ok_or(MoneyError::InvalidAllocationCount { parts })?;

    let count = Decimal::from(parts);
    let share = mode.round(total / count, decimal_places);
    let residual = total - share * count;

    let mut shares = vec![share; len];
    let corrected = match slot {
        ResidualSlot::First => 0,
        ResidualSlot::Last => len - 1,
    };
    shares[corrected] += residual;
    Ok(shares)
}

/// Normalizes a percent list so the values sum to exactly 100%.
///
/// The slot chosen by `slot` is replaced with `100% - sum(others)`; every
/// other entry passes through unchanged.
///
/// # Errors
///
/// Returns [`MoneyError::InvalidAllocationCount`] when `percents` is empty.
pub fn normalize_percents(
    percents: &[Percent],
    slot: ResidualSlot,
) -> Result<Vec<Percent>, MoneyError> {
    if percents.is_empty() {
        return Err(MoneyError::InvalidAllocationCount { parts: 0 });
    }

    let corrected = match slot {
        ResidualSlot::First => 0,
        ResidualSlot::Last => percents.len() - 1,
    };
    let others: Decimal = percents
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != corrected)
        .map(|(_, p)| p.value())
        .sum();

    let mut normalized = percents.to_vec();
    normalized[corrected] = Percent::from_value(Decimal::ONE_HUNDRED - others);
    Ok(normalized)
}
