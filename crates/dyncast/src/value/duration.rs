use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

use crate::error::CoerceError;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SEC: u64 = 1_000_000_000;
const NANOS_PER_MIN: u64 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MIN;

/// Magnitude of `i64::MIN`, the largest value a literal may accumulate.
const MAGNITUDE_LIMIT: u64 = 1 << 63;

/// Signed elapsed time with nanosecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration {
    nanos: i64,
}

impl Duration {
    pub const ZERO: Self = Self { nanos: 0 };

    #[must_use]
    pub const fn from_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    #[must_use]
    pub const fn from_micros(micros: i64) -> Self {
        Self {
            nanos: micros.saturating_mul(1_000),
        }
    }

    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self {
            nanos: millis.saturating_mul(1_000_000),
        }
    }

    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Self {
            nanos: secs.saturating_mul(1_000_000_000),
        }
    }

    #[must_use]
    pub const fn from_mins(mins: i64) -> Self {
        Self::from_secs(mins.saturating_mul(60))
    }

    #[must_use]
    pub const fn from_hours(hours: i64) -> Self {
        Self::from_secs(hours.saturating_mul(3_600))
    }

    #[must_use]
    pub const fn as_nanos(self) -> i64 {
        self.nanos
    }

    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.nanos / 1_000_000
    }

    #[must_use]
    pub fn as_secs_f64(self) -> f64 {
        self.nanos as f64 / NANOS_PER_SEC as f64
    }
}

impl From<std::time::Duration> for Duration {
    /// Saturates at `i64::MAX` nanoseconds.
    fn from(value: std::time::Duration) -> Self {
        Self::from_nanos(i64::try_from(value.as_nanos()).unwrap_or(i64::MAX))
    }
}

/// Canonical rendering: `1h30m0s`, `2.5s`, `1.5ms`, `20µs`, `7ns`, `0s`.
///
/// Hours are the largest unit; sub-second values switch to the largest unit
/// below one second.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nanos < 0 {
            f.write_str("-")?;
        }
        let magnitude = self.nanos.unsigned_abs();
        if magnitude == 0 {
            return f.write_str("0s");
        }
        if magnitude < NANOS_PER_SEC {
            let (digits, unit) = match magnitude {
                m if m < NANOS_PER_MICRO => (0, "ns"),
                m if m < NANOS_PER_MILLI => (3, "µs"),
                _ => (6, "ms"),
            };
            let (whole, frac) = split_fraction(magnitude, digits);
            return write!(f, "{whole}{frac}{unit}");
        }

        let (secs, frac) = split_fraction(magnitude, 9);
        let mins = secs / 60;
        let hours = mins / 60;
        if hours > 0 {
            write!(f, "{hours}h{}m", mins % 60)?;
        } else if mins > 0 {
            write!(f, "{mins}m")?;
        }
        write!(f, "{}{frac}s", secs % 60)
    }
}

/// Splits `value` into `value / 10^digits` and the fraction below it,
/// rendered as `.ddd` without trailing zeros (empty when zero).
fn split_fraction(value: u64, digits: u32) -> (u64, String) {
    let scale = 10u64.pow(digits);
    let rest = value % scale;
    if rest == 0 {
        return (value / scale, String::new());
    }
    let padded = format!("{rest:0width$}", width = digits as usize);
    (value / scale, format!(".{}", padded.trim_end_matches('0')))
}

impl FromStr for Duration {
    type Err = CoerceError;

    /// Parses `[-+]?(<digits>[.<digits>]<unit>)+`, e.g. `1h30m`, `-1.5s`,
    /// `300ms`. The bare literal `0` needs no unit.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || CoerceError::InvalidDuration(SmolStr::new(text));
        let overflow = || CoerceError::DurationOverflow(SmolStr::new(text));

        let (negative, mut rest) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        if rest == "0" {
            return Ok(Self::ZERO);
        }
        if rest.is_empty() {
            return Err(invalid());
        }

        let mut total: u64 = 0;
        while !rest.is_empty() {
            let first = rest.as_bytes()[0];
            if !(first == b'.' || first.is_ascii_digit()) {
                return Err(invalid());
            }

            let (whole, after_int) = leading_int(rest).ok_or_else(overflow)?;
            let has_int = after_int.len() != rest.len();
            rest = after_int;

            let mut fraction = 0u64;
            let mut scale = 1.0f64;
            let mut has_fraction = false;
            if let Some(after_dot) = rest.strip_prefix('.') {
                let (digits, digits_scale, after_frac) = leading_fraction(after_dot);
                has_fraction = after_frac.len() != after_dot.len();
                fraction = digits;
                scale = digits_scale;
                rest = after_frac;
            }
            if !has_int && !has_fraction {
                return Err(invalid());
            }

            let unit_len = rest
                .bytes()
                .position(|b| b == b'.' || b.is_ascii_digit())
                .unwrap_or(rest.len());
            if unit_len == 0 {
                return Err(invalid());
            }
            let (unit_text, after_unit) = rest.split_at(unit_len);
            rest = after_unit;
            let unit = unit_nanos(unit_text).ok_or_else(|| CoerceError::UnknownDurationUnit {
                unit: SmolStr::new(unit_text),
                text: SmolStr::new(text),
            })?;

            if whole > MAGNITUDE_LIMIT / unit {
                return Err(overflow());
            }
            let mut part = whole * unit;
            if fraction > 0 {
                // f64 keeps fractions of an hour nanosecond-accurate.
                part += (fraction as f64 * (unit as f64 / scale)) as u64;
                if part > MAGNITUDE_LIMIT {
                    return Err(overflow());
                }
            }
            total = total.checked_add(part).ok_or_else(overflow)?;
            if total > MAGNITUDE_LIMIT {
                return Err(overflow());
            }
        }

        if negative {
            return Ok(Self::from_nanos((total as i64).wrapping_neg()));
        }
        i64::try_from(total)
            .map(Self::from_nanos)
            .map_err(|_| overflow())
    }
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(NANOS_PER_MIN),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

/// Consumes leading ASCII digits; `None` when they overflow the magnitude.
fn leading_int(text: &str) -> Option<(u64, &str)> {
    let mut value: u64 = 0;
    let end = text
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(text.len());
    for digit in text[..end].bytes() {
        if value > MAGNITUDE_LIMIT / 10 {
            return None;
        }
        value = value * 10 + u64::from(digit - b'0');
        if value > MAGNITUDE_LIMIT {
            return None;
        }
    }
    Some((value, &text[end..]))
}

/// Consumes fraction digits, dropping precision instead of overflowing.
fn leading_fraction(text: &str) -> (u64, f64, &str) {
    let mut value: u64 = 0;
    let mut scale = 1.0f64;
    let mut saturated = false;
    let end = text
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(text.len());
    for digit in text[..end].bytes() {
        if saturated {
            continue;
        }
        if value > (MAGNITUDE_LIMIT - 1) / 10 {
            saturated = true;
            continue;
        }
        let next = value * 10 + u64::from(digit - b'0');
        if next > MAGNITUDE_LIMIT {
            saturated = true;
            continue;
        }
        value = next;
        scale *= 10.0;
    }
    (value, scale, &text[end..])
}
