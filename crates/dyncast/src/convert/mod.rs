//! Typed coercions.
//!
//! Every `to_*` function is total: input it cannot make sense of yields the
//! zero value of the result type. The matching `try_*` function reports the
//! failure instead; on success both return the same value.

#![allow(missing_docs)]

mod instant;
mod numeric;
mod target;
mod text;
mod xstring;

pub use target::{coerce, try_coerce, Target, UnknownTarget};

use time::OffsetDateTime;
use tracing::debug;

use crate::datetime::ZERO_INSTANT;
use crate::error::CoerceError;
use crate::value::{Duration, Value};

fn or_zero<T>(kind: &'static str, result: Result<T, CoerceError>, zero: T) -> T {
    result.unwrap_or_else(|err| {
        debug!(kind, %err, "coercion fell back to zero value");
        zero
    })
}

/// `true` when the value is a positive integer, otherwise its text read as a
/// boolean literal (`1`, `t`, `true`, `0`, `f`, `false`, any case).
pub fn to_bool(value: impl Into<Value>) -> bool {
    or_zero("bool", try_bool(value), false)
}

pub fn try_bool(value: impl Into<Value>) -> Result<bool, CoerceError> {
    let value = value.into();
    if numeric::int_of(&value).is_ok_and(|n| n > 0) {
        return Ok(true);
    }
    text::parse_bool(&text::text_of(&value))
}

#[must_use]
pub fn to_bytes(value: impl Into<Value>) -> Vec<u8> {
    text::bytes_of(&value.into())
}

/// Numbers are taken as nanoseconds (rounded like [`to_int`]); anything else
/// is read as a duration literal such as `1h30m` or `-1.5s`.
pub fn to_duration(value: impl Into<Value>) -> Duration {
    or_zero("duration", try_duration(value), Duration::ZERO)
}

pub fn try_duration(value: impl Into<Value>) -> Result<Duration, CoerceError> {
    instant::duration_of(&value.into())
}

/// Instants become Unix seconds, booleans 1 or 0, text is parsed strictly.
pub fn to_float(value: impl Into<Value>) -> f64 {
    or_zero("float", try_float(value), 0.0)
}

pub fn try_float(value: impl Into<Value>) -> Result<f64, CoerceError> {
    numeric::float_of(&value.into())
}

/// Floats round by adding one half and truncating, so `2.5` gives 3 and
/// `-2.5` gives -2. Unsigned integers reinterpret their bits.
pub fn to_int(value: impl Into<Value>) -> i64 {
    or_zero("int", try_int(value), 0)
}

pub fn try_int(value: impl Into<Value>) -> Result<i64, CoerceError> {
    numeric::int_of(&value.into())
}

/// Same rounding as [`to_int`]; negative numbers wrap around.
pub fn to_uint(value: impl Into<Value>) -> u64 {
    or_zero("uint", try_uint(value), 0)
}

pub fn try_uint(value: impl Into<Value>) -> Result<u64, CoerceError> {
    numeric::uint_of(&value.into())
}

/// Instants render as RFC 3339, durations canonically (`1h30m0s`), bytes as
/// UTF-8 with invalid sequences replaced.
#[must_use]
pub fn to_string(value: impl Into<Value>) -> String {
    text::text_of(&value.into())
}

/// Tries each layout of [`crate::datetime::LAYOUTS`] against the value's
/// text. Returns [`ZERO_INSTANT`] when none matches.
pub fn to_time(value: impl Into<Value>) -> OffsetDateTime {
    or_zero("time", try_time(value), ZERO_INSTANT)
}

pub fn try_time(value: impl Into<Value>) -> Result<OffsetDateTime, CoerceError> {
    instant::instant_of(&value.into())
}

/// Reads numbers written with either `.` or `,` as the decimal point.
///
/// Surrounding whitespace and the symbols `¢ § $ €` are ignored. Text with
/// neither separator is an integer literal (`0x`, `0o`, `0b` and leading
/// `0` select the base); literals beyond the `i64` range clamp to it.
#[must_use]
pub fn float_from_x_string(text: &str) -> f64 {
    xstring::parse_x_string(text).unwrap_or_else(|rejected| {
        debug!(kind = "x-string", err = %rejected.error, "coercion fell back");
        rejected.fallback
    })
}

pub fn try_float_from_x_string(text: &str) -> Result<f64, CoerceError> {
    xstring::parse_x_string(text).map_err(|rejected| rejected.error)
}
