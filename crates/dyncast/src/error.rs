//! Coercion errors surfaced by the strict `try_*` variants.

#![allow(missing_docs)]

use smol_str::SmolStr;
use thiserror::Error;

/// Failures the total coercions swallow and the strict ones report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoerceError {
    /// Text is not a number in the expected notation.
    #[error("invalid number '{0}'")]
    InvalidNumber(SmolStr),

    /// Integer literal does not fit in 64 bits.
    #[error("number out of range '{0}'")]
    NumberOutOfRange(SmolStr),

    /// Both separators repeat, so neither can be the decimal point.
    #[error("ambiguous decimal separators in '{0}'")]
    AmbiguousSeparators(SmolStr),

    /// Text is not a boolean literal.
    #[error("invalid boolean '{0}'")]
    InvalidBool(SmolStr),

    /// Text is not a duration literal.
    #[error("invalid duration '{0}'")]
    InvalidDuration(SmolStr),

    /// Duration literal uses a unit outside ns/us/µs/ms/s/m/h.
    #[error("unknown unit '{unit}' in duration '{text}'")]
    UnknownDurationUnit { unit: SmolStr, text: SmolStr },

    /// Duration literal exceeds the nanosecond range.
    #[error("duration out of range '{0}'")]
    DurationOverflow(SmolStr),

    /// No timestamp layout matched the text.
    #[error("no timestamp layout matches '{0}'")]
    UnknownTimestamp(SmolStr),
}
