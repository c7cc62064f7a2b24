use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Parses a string into a [`Decimal`].
///
/// Surrounding whitespace is ignored and empty input is treated as 0.
/// Only a plain `.` decimal point is accepted: separators such as `,` and
/// exponents such as `1e3` are errors, as is anything outside the range
/// of [`Decimal`].
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }
    trimmed.parse().map_err(|e| ParseDecimalError {
        input: s.to_string(),
        source: e,
    })
}

/// Parses raw field text, substituting 0 for anything that is not a number.
///
/// This is the only normalization the calculator's inputs get; it never fails.
pub fn parse_or_zero(s: &str) -> Decimal {
    parse_decimal(s).unwrap_or_else(|e| {
        debug!("{e}, using 0");
        Decimal::ZERO
    })
}
