use smol_str::SmolStr;

use crate::error::CoerceError;
use crate::value::Value;

use super::text::text_of;

const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Strict decimal float parse: sign, exponent and `inf`/`nan` spellings.
pub(super) fn parse_float(text: &str) -> Result<f64, CoerceError> {
    text.parse::<f64>()
        .map_err(|_| CoerceError::InvalidNumber(SmolStr::new(text)))
}

/// Adds one half and truncates toward zero; saturates, NaN is 0.
pub(super) fn half_up(v: f64) -> i64 {
    (v + 0.5) as i64
}

pub(super) fn half_up_f32(v: f32) -> i64 {
    (v + 0.5) as i64
}

/// Like [`half_up`], but values below 2^63 go through `i64` so negative
/// inputs wrap instead of clamping to zero.
pub(super) fn half_up_unsigned(biased: f64) -> u64 {
    if biased < TWO_POW_63 {
        biased as i64 as u64
    } else {
        biased as u64
    }
}

pub(super) fn float_of(value: &Value) -> Result<f64, CoerceError> {
    match value {
        Value::Int(v) => Ok(*v as f64),
        Value::Uint(v) => Ok(*v as f64),
        Value::Float32(v) => Ok(f64::from(*v)),
        Value::Float(v) => Ok(*v),
        Value::Instant(t) => Ok(t.unix_timestamp() as f64),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        _ => parse_float(&text_of(value)),
    }
}

pub(super) fn int_of(value: &Value) -> Result<i64, CoerceError> {
    match value {
        Value::Int(v) => Ok(*v),
        Value::Uint(v) => Ok(*v as i64),
        Value::Float32(v) => Ok(half_up_f32(*v)),
        Value::Float(v) => Ok(half_up(*v)),
        Value::Instant(t) => Ok(t.unix_timestamp()),
        Value::Bool(b) => Ok(i64::from(*b)),
        _ => parse_float(&text_of(value)).map(half_up),
    }
}

pub(super) fn uint_of(value: &Value) -> Result<u64, CoerceError> {
    match value {
        Value::Int(v) => Ok(*v as u64),
        Value::Uint(v) => Ok(*v),
        Value::Float32(v) => Ok(half_up_unsigned(f64::from(*v + 0.5))),
        Value::Float(v) => Ok(half_up_unsigned(*v + 0.5)),
        Value::Instant(t) => Ok(t.unix_timestamp() as u64),
        Value::Bool(b) => Ok(u64::from(*b)),
        _ => parse_float(&text_of(value)).map(|v| half_up_unsigned(v + 0.5)),
    }
}
