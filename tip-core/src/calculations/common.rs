//! Common utility functions for tip calculations.
//!
//! This module provides the percentage, summing and rounding operations
//! shared by the tip, total and split calculations. None of them panic:
//! a result beyond the range of [`Decimal`] saturates at [`Decimal::MAX`]
//! or [`Decimal::MIN`] and is logged at warn level.

use rust_decimal::Decimal;
use tracing::warn;

/// One hundred percent.
pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Applies a percentage to an amount: `percent / 100 * amount`.
///
/// Negative inputs are multiplied through unchanged. A product out of
/// range saturates with the sign it would have had.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(10), dec!(20)), dec!(2));
/// assert_eq!(percent_of(dec!(10), dec!(18)), dec!(1.8));
/// assert_eq!(percent_of(dec!(-10), dec!(20)), dec!(-2));
/// assert_eq!(percent_of(Decimal::MAX, dec!(200)), Decimal::MAX);
/// ```
pub fn percent_of(
    amount: Decimal,
    percent: Decimal,
) -> Decimal {
    match percent
        .checked_div(HUNDRED)
        .and_then(|rate| rate.checked_mul(amount))
    {
        Some(result) => result.normalize(),
        None => {
            let result = bound(amount.is_sign_negative() != percent.is_sign_negative());
            warn!(%amount, %percent, %result, "percentage out of range, saturated");
            result
        }
    }
}

/// Adds two amounts, saturating when the sum is out of range.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::sum;
///
/// assert_eq!(sum(dec!(10), dec!(2)), dec!(12));
/// assert_eq!(sum(Decimal::MAX, dec!(1)), Decimal::MAX);
/// ```
pub fn sum(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    a.checked_add(b).unwrap_or_else(|| {
        // Overflow needs both operands on the same side of zero.
        let result = bound(a.is_sign_negative());
        warn!(%a, %b, %result, "sum out of range, saturated");
        result
    })
}

/// The representable extreme on one side of zero.
fn bound(negative: bool) -> Decimal {
    if negative { Decimal::MIN } else { Decimal::MAX }
}

/// Rounds a value up to the nearest whole currency unit.
///
/// This is a ceiling, so negative values move toward zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::round_up_whole;
///
/// assert_eq!(round_up_whole(dec!(1.8)), dec!(2));
/// assert_eq!(round_up_whole(dec!(2.0)), dec!(2));
/// assert_eq!(round_up_whole(dec!(-1.8)), dec!(-1));
/// ```
pub fn round_up_whole(value: Decimal) -> Decimal {
    value.ceil()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // percent_of tests
    // =========================================================================

    #[test]
    fn percent_of_computes_fraction_of_amount() {
        let result = percent_of(dec!(10), dec!(20));

        assert_eq!(result, dec!(2));
    }

    #[test]
    fn percent_of_keeps_fractional_result() {
        let result = percent_of(dec!(10), dec!(18));

        assert_eq!(result, dec!(1.8));
    }

    #[test]
    fn percent_of_zero_amount_is_zero() {
        let result = percent_of(Decimal::ZERO, dec!(15));

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn percent_of_zero_percent_is_zero() {
        let result = percent_of(dec!(42.50), Decimal::ZERO);

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn percent_of_handles_fractional_percent() {
        let result = percent_of(dec!(80), dec!(12.5));

        assert_eq!(result, dec!(10));
    }

    #[test]
    fn percent_of_multiplies_negative_amount_through() {
        let result = percent_of(dec!(-50), dec!(10));

        assert_eq!(result, dec!(-5));
    }

    #[test]
    fn percent_of_handles_large_amount() {
        let result = percent_of(dec!(1234567.89), dec!(15));

        assert_eq!(result, dec!(185185.1835));
    }

    #[test]
    fn percent_of_saturates_on_overflow() {
        let result = percent_of(Decimal::MAX, dec!(200));

        assert_eq!(result, Decimal::MAX);
    }

    #[test]
    fn percent_of_saturates_negative_product_at_minimum() {
        assert_eq!(percent_of(Decimal::MIN, dec!(200)), Decimal::MIN);
        assert_eq!(percent_of(Decimal::MAX, dec!(-200)), Decimal::MIN);
    }

    #[test]
    fn percent_of_largest_amount_at_one_percent_fits() {
        let result = percent_of(Decimal::MAX, dec!(1));

        assert_eq!(result, dec!(792281625142643375935439503.35));
    }

    // =========================================================================
    // sum tests
    // =========================================================================

    #[test]
    fn sum_adds_amounts() {
        let result = sum(dec!(10), dec!(1.8));

        assert_eq!(result, dec!(11.8));
    }

    #[test]
    fn sum_saturates_on_overflow() {
        let result = sum(Decimal::MAX, dec!(792281625142643375935439503.35));

        assert_eq!(result, Decimal::MAX);
    }

    #[test]
    fn sum_saturates_negative_overflow_at_minimum() {
        let result = sum(Decimal::MIN, dec!(-1));

        assert_eq!(result, Decimal::MIN);
    }

    // =========================================================================
    // round_up_whole tests
    // =========================================================================

    #[test]
    fn round_up_whole_raises_fraction() {
        let result = round_up_whole(dec!(1.01));

        assert_eq!(result, dec!(2));
    }

    #[test]
    fn round_up_whole_preserves_whole_values() {
        let result = round_up_whole(dec!(3));

        assert_eq!(result, dec!(3));
    }

    #[test]
    fn round_up_whole_handles_zero() {
        let result = round_up_whole(Decimal::ZERO);

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn round_up_whole_moves_negative_toward_zero() {
        let result = round_up_whole(dec!(-1.8));

        assert_eq!(result, dec!(-1));
    }
}
