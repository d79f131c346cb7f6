//! Property-based tests for the shared allocator and percent division.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::allocation::{self, ResidualSlot};
use crate::percent::Percent;
use crate::rounding::RoundingMode;

/// Strategy to generate totals with up to four fractional digits.
fn total() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64).prop_map(|n| Decimal::new(n, 4))
}

/// Strategy to generate positive percent magnitudes (0.00001% to 100%).
fn percent_value() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|v| Decimal::new(v, 5))
}

/// Strategy to generate allocation counts (1 to 50).
fn parts() -> impl Strategy<Value = i32> {
    1i32..50
}

/// Strategy to generate target precisions (0 to 5 digits).
fn precision() -> impl Strategy<Value = u32> {
    0u32..=5
}

/// Strategy to generate every rounding mode.
fn rounding() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![
        Just(RoundingMode::HalfAwayFromZero),
        Just(RoundingMode::HalfTowardZero),
        Just(RoundingMode::HalfToEven),
        Just(RoundingMode::TowardZero),
    ]
}

/// Strategy to generate both residual slots.
fn slot() -> impl Strategy<Value = ResidualSlot> {
    prop_oneof![Just(ResidualSlot::First), Just(ResidualSlot::Last)]
}

/// Strategy to generate percent lists of 1 to 10 entries.
fn percent_list() -> impl Strategy<Value = Vec<Percent>> {
    prop::collection::vec(
        (1u32..10_000u32).prop_map(|v| Percent::from_value(Decimal::new(i64::from(v), 2))),
        1..10,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* total, count, precision, mode, and slot, the allocated
    /// shares SHALL sum exactly to the total.
    #[test]
    fn prop_allocate_amount_sum_invariant(
        total in total(),
        parts in parts(),
        precision in precision(),
        mode in rounding(),
        slot in slot(),
    ) {
        let shares =
            allocation::allocate_amount(total, parts, precision, mode, slot).unwrap();
        let sum: Decimal = shares.iter().copied().sum();
        prop_assert_eq!(sum, total, "allocation must not create or destroy value");
    }

    /// *For any* inputs, allocation SHALL return exactly `parts` shares.
    #[test]
    fn prop_allocate_amount_count(
        total in total(),
        parts in parts(),
        precision in precision(),
        mode in rounding(),
        slot in slot(),
    ) {
        let shares =
            allocation::allocate_amount(total, parts, precision, mode, slot).unwrap();
        prop_assert_eq!(shares.len(), usize::try_from(parts).unwrap());
    }

    /// *For any* percent and count, division SHALL preserve the value
    /// exactly and produce the requested number of parts.
    #[test]
    fn prop_percent_divide_sum_invariant(value in percent_value(), parts in parts()) {
        let percent = Percent::from_value(value);
        let result = percent.divide_by(parts).unwrap();
        let sum: Decimal = result.iter().map(|p| p.value()).sum();
        prop_assert_eq!(sum, percent.value());
        prop_assert_eq!(result.len(), usize::try_from(parts).unwrap());
    }

    /// *For any* percent, count, and precision, division at that precision
    /// SHALL still preserve the value exactly.
    #[test]
    fn prop_percent_divide_dp_sum_invariant(
        value in percent_value(),
        parts in parts(),
        precision in precision(),
    ) {
        let percent = Percent::from_value(value);
        let result = percent.divide_by_dp(parts, precision).unwrap();
        let sum: Decimal = result.iter().map(|p| p.value()).sum();
        prop_assert_eq!(sum, percent.value());
    }

    /// *For any* percent list, normalization SHALL make the values sum to
    /// exactly 100% while leaving every non-corrected entry untouched.
    #[test]
    fn prop_normalize_sums_to_one_hundred(
        percents in percent_list(),
        slot in slot(),
    ) {
        let normalized = allocation::normalize_percents(&percents, slot).unwrap();
        let sum: Decimal = normalized.iter().map(|p| p.value()).sum();
        prop_assert_eq!(sum, Decimal::ONE_HUNDRED);
        prop_assert_eq!(normalized.len(), percents.len());

        let corrected = match slot {
            ResidualSlot::First => 0,
            ResidualSlot::Last => percents.len() - 1,
        };
        for (i, (given, kept)) in percents.iter().zip(normalized.iter()).enumerate() {
            if i != corrected {
                prop_assert_eq!(given, kept);
            }
        }
    }
}
