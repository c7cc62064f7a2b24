//! Locale-aware currency formatting.
//!
//! Digits, decimal separator and grouping come from ICU4X compiled locale
//! data. The currency symbol and its placement come from [`CurrencyLocale`].

use std::{fmt, str::FromStr};

use fixed_decimal::FixedDecimal;
use icu::decimal::{FixedDecimalFormatter, options::FixedDecimalFormatterOptions};
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;
use tracing::warn;
use writeable::Writeable;

use crate::models::{CurrencyLocale, locale::SymbolPlacement};

/// Error returned when number formatting data for a locale cannot be loaded.
#[derive(Debug, Error)]
#[error("cannot load number formatting data for {locale}: {source}")]
pub struct CurrencyFormatError {
    locale: CurrencyLocale,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

/// Formats amounts as currency for one locale.
pub struct CurrencyFormatter {
    locale: CurrencyLocale,
    numbers: FixedDecimalFormatter,
}

impl fmt::Debug for CurrencyFormatter {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("CurrencyFormatter")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl CurrencyFormatter {
    /// Loads the number formatting data for `locale`.
    pub fn try_new(locale: CurrencyLocale) -> Result<Self, CurrencyFormatError> {
        let numbers = FixedDecimalFormatter::try_new(
            &locale.to_icu_locale().into(),
            FixedDecimalFormatterOptions::default(),
        )
        .map_err(|e| CurrencyFormatError {
            locale,
            source: Box::new(e),
        })?;

        Ok(Self { locale, numbers })
    }

    pub fn locale(&self) -> CurrencyLocale {
        self.locale
    }

    /// Formats `amount` in the locale's currency.
    ///
    /// The amount is rounded half-to-even to the currency's minor units and
    /// always shows exactly that many fraction digits. Negative amounts carry
    /// a leading minus sign in front of the whole pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tip_core::{CurrencyFormatter, CurrencyLocale};
    ///
    /// let usd = CurrencyFormatter::try_new(CurrencyLocale::EnUs).unwrap();
    /// assert_eq!(usd.format(dec!(1234.5)), "$1,234.50");
    /// assert_eq!(usd.format(dec!(-2)), "-$2.00");
    /// ```
    pub fn format(
        &self,
        amount: Decimal,
    ) -> String {
        let digits = self.locale.fraction_digits();
        let rounded = amount.round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven);

        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let number = self.format_digits(rounded.abs(), digits);
        let symbol = self.locale.currency_symbol();
        let sign = if negative { "-" } else { "" };

        match self.locale.symbol_placement() {
            SymbolPlacement::Prefix => format!("{sign}{symbol}{number}"),
            SymbolPlacement::Suffix => format!("{sign}{number}\u{a0}{symbol}"),
        }
    }

    /// Localizes the digits of a non-negative, already rounded amount,
    /// padded to `fraction_digits` decimals.
    ///
    /// Padding happens here rather than by rescaling the [`Decimal`], which
    /// cannot hold two more digits once the amount is near its maximum.
    fn format_digits(
        &self,
        magnitude: Decimal,
        fraction_digits: u32,
    ) -> String {
        let plain = magnitude.to_string();
        let position = -i16::try_from(fraction_digits).unwrap_or(0);
        match FixedDecimal::from_str(&plain) {
            Ok(fixed) => self
                .numbers
                .format(&fixed.padded_end(position))
                .write_to_string()
                .into_owned(),
            Err(e) => {
                warn!(amount = %plain, locale = %self.locale, "unformattable amount: {e:?}");
                plain
            }
        }
    }
}
