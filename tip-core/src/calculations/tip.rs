//! Tip calculation.
//!
//! A tip is `tip_percent / 100 * amount`. When rounding up is requested the
//! raw tip is replaced by its ceiling *before* it is handed to the currency
//! formatter, so a currency with minor units still shows them (`$2.00`).
//!
//! | Step | Value |
//! |------|-------|
//! | 1    | Bill amount |
//! | 2    | Tip percentage (15 when the caller does not supply one) |
//! | 3    | Raw tip (Line 2 / 100 × Line 1) |
//! | 4    | Tip (ceiling of Line 3 if rounding up, else Line 3) |
//! | 5    | Total (Line 1 + Line 4) |
//!
//! Amounts beyond the range of [`Decimal`] saturate instead of failing, see
//! [`common`](crate::calculations::common).
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tip_core::{CurrencyLocale, TipCalculator, TipInput};
//!
//! let calculator = TipCalculator::new(CurrencyLocale::EnUs).unwrap();
//!
//! let input = TipInput {
//!     amount: dec!(10),
//!     tip_percent: dec!(18),
//!     round_up: true,
//! };
//!
//! assert_eq!(calculator.tip_amount(&input), dec!(2));
//! assert_eq!(calculator.calculate(&input), "$2.00");
//! assert_eq!(calculator.format_total(&input), "$12.00");
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::calculations::common::{percent_of, round_up_whole, sum};
use crate::currency::{CurrencyFormatError, CurrencyFormatter};
use crate::models::CurrencyLocale;

/// Input values for a tip calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipInput {
    /// Bill amount before the tip. Expected to be non-negative; negative
    /// amounts are multiplied through unmodified.
    pub amount: Decimal,

    /// Tip percentage, e.g. `15` for 15%.
    pub tip_percent: Decimal,

    /// Whether the tip is rounded up to a whole currency unit.
    pub round_up: bool,
}

impl TipInput {
    /// Tip percentage used when the caller does not supply one.
    pub const DEFAULT_TIP_PERCENT: Decimal = dec!(15);

    /// Creates an input with the default tip percentage and no rounding.
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            tip_percent: Self::DEFAULT_TIP_PERCENT,
            round_up: false,
        }
    }

    pub fn with_tip_percent(
        mut self,
        tip_percent: Decimal,
    ) -> Self {
        self.tip_percent = tip_percent;
        self
    }

    pub fn with_round_up(
        mut self,
        round_up: bool,
    ) -> Self {
        self.round_up = round_up;
        self
    }
}

/// Calculator turning bill amounts into formatted tips.
///
/// Holds only the currency formatter for its locale; every calculation is a
/// pure function of the input it is given.
#[derive(Debug)]
pub struct TipCalculator {
    formatter: CurrencyFormatter,
}

impl TipCalculator {
    /// Creates a calculator that formats in the currency of `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`CurrencyFormatError`] if the locale's number formatting
    /// data cannot be loaded.
    pub fn new(locale: CurrencyLocale) -> Result<Self, CurrencyFormatError> {
        Ok(Self {
            formatter: CurrencyFormatter::try_new(locale)?,
        })
    }

    /// Creates a calculator for the locale found in the process environment.
    pub fn for_default_locale() -> Result<Self, CurrencyFormatError> {
        Self::new(CurrencyLocale::from_env())
    }

    pub fn locale(&self) -> CurrencyLocale {
        self.formatter.locale()
    }

    /// Calculates the numeric tip, rounded up when requested.
    pub fn tip_amount(
        &self,
        input: &TipInput,
    ) -> Decimal {
        let raw_tip = percent_of(input.amount, input.tip_percent);
        let tip = if input.round_up {
            round_up_whole(raw_tip)
        } else {
            raw_tip
        };

        trace!(
            amount = %input.amount,
            tip_percent = %input.tip_percent,
            round_up = input.round_up,
            %raw_tip,
            %tip,
            "calculated tip"
        );

        tip
    }

    /// Calculates the tip and formats it in the calculator's currency.
    pub fn calculate(
        &self,
        input: &TipInput,
    ) -> String {
        self.formatter.format(self.tip_amount(input))
    }

    /// Formats the tip for the given values.
    ///
    /// A `tip_percent` of `None` uses [`TipInput::DEFAULT_TIP_PERCENT`].
    pub fn calculate_tip(
        &self,
        amount: Decimal,
        tip_percent: Option<Decimal>,
        round_up: bool,
    ) -> String {
        let input = TipInput {
            amount,
            tip_percent: tip_percent.unwrap_or(TipInput::DEFAULT_TIP_PERCENT),
            round_up,
        };
        self.calculate(&input)
    }

    /// Bill amount plus the (possibly rounded) tip.
    pub fn total_amount(
        &self,
        input: &TipInput,
    ) -> Decimal {
        sum(input.amount, self.tip_amount(input))
    }

    pub fn format_total(
        &self,
        input: &TipInput,
    ) -> String {
        self.formatter.format(self.total_amount(input))
    }

    /// Share of the total for each of `people`, or `None` when nobody pays.
    pub fn split(
        &self,
        input: &TipInput,
        people: u32,
    ) -> Option<Decimal> {
        self.total_amount(input).checked_div(Decimal::from(people))
    }

    pub fn format_split(
        &self,
        input: &TipInput,
        people: u32,
    ) -> Option<String> {
        self.split(input, people).map(|share| self.formatter.format(share))
    }

    /// Formats an arbitrary amount in the calculator's currency.
    pub fn format_amount(
        &self,
        amount: Decimal,
    ) -> String {
        self.formatter.format(amount)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn usd() -> TipCalculator {
        TipCalculator::new(CurrencyLocale::EnUs).expect("compiled locale data")
    }

    fn input(
        amount: Decimal,
        tip_percent: Decimal,
        round_up: bool,
    ) -> TipInput {
        TipInput {
            amount,
            tip_percent,
            round_up,
        }
    }

    // =========================================================================
    // tip_amount tests
    // =========================================================================

    #[test]
    fn tip_amount_without_rounding_keeps_fraction() {
        let result = usd().tip_amount(&input(dec!(10), dec!(18), false));

        assert_eq!(result, dec!(1.8));
    }

    #[test]
    fn tip_amount_with_rounding_takes_ceiling() {
        let result = usd().tip_amount(&input(dec!(10), dec!(18), true));

        assert_eq!(result, dec!(2));
    }

    #[test]
    fn tip_amount_rounding_leaves_whole_tip_unchanged() {
        let result = usd().tip_amount(&input(dec!(10), dec!(20), true));

        assert_eq!(result, dec!(2));
    }

    #[test]
    fn tip_amount_multiplies_negative_amount_through() {
        let result = usd().tip_amount(&input(dec!(-10), dec!(20), false));

        assert_eq!(result, dec!(-2));
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn calculate_twenty_percent_of_ten() {
        let result = usd().calculate(&input(dec!(10), dec!(20), false));

        assert_eq!(result, "$2.00");
    }

    #[test]
    fn calculate_rounds_up_before_formatting() {
        let result = usd().calculate(&input(dec!(10), dec!(18), true));

        assert_eq!(result, "$2.00");
    }

    #[test]
    fn calculate_without_rounding_shows_cents() {
        let result = usd().calculate(&input(dec!(10), dec!(18), false));

        assert_eq!(result, "$1.80");
    }

    #[test]
    fn calculate_zero_amount_formats_zero() {
        let result = usd().calculate(&input(Decimal::ZERO, dec!(15), false));

        assert_eq!(result, "$0.00");
    }

    #[test]
    fn calculate_zero_percent_formats_zero() {
        let result = usd().calculate(&input(dec!(87.25), Decimal::ZERO, true));

        assert_eq!(result, "$0.00");
    }

    #[test]
    fn calculate_is_repeatable() {
        let calculator = usd();
        let tip = input(dec!(43.17), dec!(17.5), false);

        assert_eq!(calculator.calculate(&tip), calculator.calculate(&tip));
    }

    #[test]
    fn calculate_rounds_yen_up_to_whole_units() {
        let calculator = TipCalculator::new(CurrencyLocale::JaJp).expect("compiled locale data");

        assert_eq!(calculator.calculate(&input(dec!(1000), dec!(12.34), true)), "￥124");
    }

    // =========================================================================
    // default tip percentage
    // =========================================================================

    #[test]
    fn calculate_tip_defaults_to_fifteen_percent() {
        let result = usd().calculate_tip(dec!(100), None, false);

        assert_eq!(result, "$15.00");
    }

    #[test]
    fn calculate_tip_uses_supplied_percentage() {
        let result = usd().calculate_tip(dec!(100), Some(dec!(20)), false);

        assert_eq!(result, "$20.00");
    }

    #[test]
    fn new_input_uses_default_percentage() {
        let tip = TipInput::new(dec!(40));

        assert_eq!(tip.tip_percent, dec!(15));
        assert!(!tip.round_up);
    }

    #[test]
    fn builder_overrides_defaults() {
        let tip = TipInput::new(dec!(40))
            .with_tip_percent(dec!(22))
            .with_round_up(true);

        assert_eq!(tip, input(dec!(40), dec!(22), true));
    }

    // =========================================================================
    // total and split tests
    // =========================================================================

    #[test]
    fn total_adds_rounded_tip_to_bill() {
        let tip = input(dec!(10), dec!(18), true);

        assert_eq!(usd().total_amount(&tip), dec!(12));
        assert_eq!(usd().format_total(&tip), "$12.00");
    }

    #[test]
    fn split_divides_total_between_people() {
        let result = usd().split(&input(dec!(90), dec!(20), false), 4);

        assert_eq!(result, Some(dec!(27)));
    }

    #[test]
    fn split_formats_share() {
        let result = usd().format_split(&input(dec!(100), dec!(15), false), 3);

        assert_eq!(result.as_deref(), Some("$38.33"));
    }

    #[test]
    fn split_between_nobody_is_none() {
        let result = usd().split(&input(dec!(100), dec!(15), false), 0);

        assert_eq!(result, None);
    }

    // =========================================================================
    // out of range amounts
    // =========================================================================

    const LARGEST_BILL: Decimal = Decimal::MAX;

    #[test]
    fn tip_beyond_range_saturates() {
        let result = usd().calculate(&input(LARGEST_BILL, dec!(200), false));

        assert_eq!(result, "$79,228,162,514,264,337,593,543,950,335.00");
    }

    #[test]
    fn rounding_up_saturated_tip_keeps_it() {
        let result = usd().tip_amount(&input(LARGEST_BILL, dec!(200), true));

        assert_eq!(result, Decimal::MAX);
    }

    #[test]
    fn total_beyond_range_saturates() {
        let calculator = usd();
        let tip = input(LARGEST_BILL, dec!(1), false);

        assert_eq!(calculator.calculate(&tip), "$792,281,625,142,643,375,935,439,503.35");
        assert_eq!(calculator.total_amount(&tip), Decimal::MAX);
    }

    #[test]
    fn negative_total_beyond_range_saturates() {
        let result = usd().total_amount(&input(Decimal::MIN, dec!(1), false));

        assert_eq!(result, Decimal::MIN);
    }

    #[test]
    fn split_of_saturated_total_divides_it() {
        let result = usd().split(&input(LARGEST_BILL, dec!(1), false), 5);

        assert_eq!(result, Some(dec!(15845632502852867518708790067)));
    }
}
