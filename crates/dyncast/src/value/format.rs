//! Default textual rendering of values.
//!
//! This is the text every "anything else" coercion branch falls back to.
//! Floats use the shortest digits that round-trip, switching to scientific
//! notation when the decimal exponent is below -4 or at least 6.

use std::fmt;

use crate::datetime::format_default;

use super::Value;

const SCIENTIFIC_MIN_EXP: i32 = -4;
const SCIENTIFIC_MAX_EXP: i32 = 6;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => Ok(()),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Uint(v) => write!(f, "{v}"),
            Value::Float32(v) => f.write_str(&format_f32(*v)),
            Value::Float(v) => f.write_str(&format_f64(*v)),
            Value::Text(v) => f.write_str(v),
            Value::Bytes(v) => f.write_str(&String::from_utf8_lossy(v)),
            Value::Instant(v) => f.write_str(&format_default(*v)),
            Value::Duration(v) => write!(f, "{v}"),
            Value::Opaque(v) => f.write_str(&v.as_text()),
        }
    }
}

pub fn format_f64(value: f64) -> String {
    if let Some(special) = non_finite(value.is_nan(), value.is_infinite(), value > 0.0) {
        return special.to_string();
    }
    choose_notation(&format!("{value:e}"), || format!("{value}"))
}

pub fn format_f32(value: f32) -> String {
    if let Some(special) = non_finite(value.is_nan(), value.is_infinite(), value > 0.0) {
        return special.to_string();
    }
    choose_notation(&format!("{value:e}"), || format!("{value}"))
}

fn non_finite(nan: bool, infinite: bool, positive: bool) -> Option<&'static str> {
    match (nan, infinite, positive) {
        (true, _, _) => Some("NaN"),
        (false, true, true) => Some("+Inf"),
        (false, true, false) => Some("-Inf"),
        _ => None,
    }
}

/// `scientific` is Rust's shortest `{:e}` rendering (`1.5e-7`, `-2e6`).
fn choose_notation(scientific: &str, plain: impl FnOnce() -> String) -> String {
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return plain();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return plain();
    };
    if (SCIENTIFIC_MIN_EXP..SCIENTIFIC_MAX_EXP).contains(&exponent) {
        return plain();
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}
