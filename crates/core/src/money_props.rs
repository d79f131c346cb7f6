//! Property-based tests for money construction, arithmetic, and allocation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::allocation::ResidualSlot;
use crate::currency::Currency;
use crate::money::Money;
use crate::rounding::RoundingMode;

/// Strategy to generate amounts between -1,000,000.00 and 1,000,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate raw, over-precise amounts (six fractional digits).
fn raw_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000_000i64..100_000_000_000i64).prop_map(|n| Decimal::new(n, 6))
}

/// Strategy to generate allocation counts (1 to 100).
fn parts() -> impl Strategy<Value = i32> {
    1i32..100
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

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Allocation Sum Invariant
    // =========================================================================

    /// *For any* amount, part count, rounding mode, and residual slot, the
    /// allocated parts SHALL sum exactly to the original amount.
    #[test]
    fn prop_allocate_sum_invariant(
        amount in amount(),
        parts in parts(),
        mode in rounding(),
        slot in slot(),
    ) {
        let money = Money::create_with(amount, Currency::BRL, mode);
        let result = money.allocate_with(parts, slot).unwrap();
        let sum: Decimal = result.iter().map(Money::amount).sum();
        prop_assert_eq!(
            sum, money.amount(),
            "Sum of allocations must equal the original amount"
        );
    }

    /// *For any* inputs, allocation SHALL return exactly `parts` amounts,
    /// every one in the original currency.
    #[test]
    fn prop_allocate_count_and_currency(
        amount in amount(),
        parts in parts(),
        slot in slot(),
    ) {
        let money = Money::create(amount, Currency::USD);
        let result = money.allocate_with(parts, slot).unwrap();
        prop_assert_eq!(result.len(), usize::try_from(parts).unwrap());
        for part in &result {
            prop_assert_eq!(part.currency(), &Currency::USD);
        }
    }

    /// *For any* inputs, every slot except the residual one SHALL hold the
    /// same rounded share.
    #[test]
    fn prop_allocate_non_residual_parts_equal(
        amount in amount(),
        parts in parts(),
        slot in slot(),
    ) {
        let money = Money::create(amount, Currency::USD);
        let result = money.allocate_with(parts, slot).unwrap();
        prop_assume!(result.len() > 1);
        let residual_index = match slot {
            ResidualSlot::First => 0,
            ResidualSlot::Last => result.len() - 1,
        };
        let share = result[if residual_index == 0 { result.len() - 1 } else { 0 }].amount();
        for (i, part) in result.iter().enumerate() {
            if i != residual_index {
                prop_assert_eq!(part.amount(), share);
            }
        }
    }

    // =========================================================================
    // Construction rounding
    // =========================================================================

    /// *For any* raw amount, `create` SHALL keep at most the currency's
    /// minor-unit digits, and SHALL match half-away-from-zero rounding.
    #[test]
    fn prop_create_rounds_to_currency_decimals(raw in raw_amount()) {
        let money = Money::create(raw, Currency::USD);
        let scaled = money.amount() * Decimal::ONE_HUNDRED;
        prop_assert_eq!(scaled, scaled.round(), "amount must have at most 2 digits");
        prop_assert_eq!(
            money.amount(),
            RoundingMode::HalfAwayFromZero.round(raw, 2)
        );
    }

    /// *For any* raw amount, construction is deterministic.
    #[test]
    fn prop_create_is_deterministic(raw in raw_amount(), mode in rounding()) {
        let first = Money::create_with(raw, Currency::EUR, mode);
        let second = Money::create_with(raw, Currency::EUR, mode);
        prop_assert_eq!(first, second);
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    /// *For any* two same-currency amounts, addition then subtraction of the
    /// same operand SHALL return the original.
    #[test]
    fn prop_add_then_subtract_round_trips(a in amount(), b in amount()) {
        let ma = Money::create(a, Currency::BRL);
        let mb = Money::create(b, Currency::BRL);
        let round_trip = ma.try_add(&mb).unwrap().try_subtract(&mb).unwrap();
        prop_assert_eq!(round_trip, ma);
    }

    /// *For any* amount and scalar, scalar multiplication SHALL keep the raw
    /// product without re-rounding.
    #[test]
    fn prop_scale_keeps_raw_product(
        amount in amount(),
        factor in (-100_000i64..100_000i64).prop_map(|n| Decimal::new(n, 3)),
    ) {
        let money = Money::create(amount, Currency::USD);
        prop_assert_eq!(money.scale(factor).amount(), money.amount() * factor);
    }

    /// *For any* same-currency pair with a non-zero divisor, applying the
    /// ratio back to the divisor SHALL recover the dividend within the joint
    /// precision of Percent (five digits) and the currency (two digits).
    #[test]
    fn prop_ratio_round_trip(a in amount(), b in amount()) {
        prop_assume!(!b.is_zero());
        let ma = Money::create(a, Currency::USD);
        let mb = Money::create(b, Currency::USD);
        let ratio = ma.ratio_of(&mb).unwrap();
        let back = mb.percent_of(ratio);
        // Five-digit percent rounding error scales with |b|; truncation
        // adds at most one minor unit.
        let tolerance = mb.amount().abs() * dec!(0.00000005) + dec!(0.01);
        prop_assert!(
            (back.amount() - ma.amount()).abs() <= tolerance,
            "ratio round trip drifted: {} vs {}",
            back.amount(),
            ma.amount()
        );
    }
}
