//! Locale-tolerant numeric text.
//!
//! `1.234,56` and `1,234.56` both read as 1234.56: the separator counts
//! decide which one is the decimal point.

use std::borrow::Cow;

use smol_str::SmolStr;

use crate::error::CoerceError;

use super::numeric::parse_float;

const TRIMMED: &[char] = &['\t', '\n', '\r', '¢', '§', '$', '€', ' '];

/// A failed normalization, with the value the total variant reports.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Rejected {
    pub(super) error: CoerceError,
    pub(super) fallback: f64,
}

impl From<CoerceError> for Rejected {
    fn from(error: CoerceError) -> Self {
        Rejected {
            error,
            fallback: 0.0,
        }
    }
}

pub(super) fn parse_x_string(raw: &str) -> Result<f64, Rejected> {
    let text = raw.trim_matches(TRIMMED);
    let commas = text.matches(',').count();
    let periods = text.matches('.').count();
    let normalized: Cow<'_, str> = match (commas, periods) {
        (0, 1) => Cow::Borrowed(text),
        (1, 0) => Cow::Owned(text.replacen(',', ".", 1)),
        (0, 0) => return integer_literal(text),
        (c, p) if c > 1 && p < 2 => Cow::Owned(text.replace(',', "")),
        (c, p) if c < 2 && p > 1 => Cow::Owned(comma_decimal(text)),
        (1, 1) => {
            if text.find('.') < text.find(',') {
                Cow::Owned(comma_decimal(text))
            } else {
                Cow::Owned(text.replace(',', ""))
            }
        }
        _ => return Err(CoerceError::AmbiguousSeparators(SmolStr::new(raw)).into()),
    };
    parse_float(&normalized).map_err(Rejected::from)
}

/// Periods group thousands, the first comma is the decimal point.
fn comma_decimal(text: &str) -> String {
    text.replace('.', "").replacen(',', ".", 1)
}

fn integer_literal(text: &str) -> Result<f64, Rejected> {
    match parse_int_literal(text) {
        Ok(n) => Ok(n as f64),
        Err(IntLiteralError::Syntax) => {
            Err(CoerceError::InvalidNumber(SmolStr::new(text)).into())
        }
        Err(IntLiteralError::Range(clamped)) => Err(Rejected {
            error: CoerceError::NumberOutOfRange(SmolStr::new(text)),
            fallback: clamped as f64,
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntLiteralError {
    Syntax,
    /// Carries the literal clamped to the `i64` range.
    Range(i64),
}

/// Integer literal with an optional sign and a base prefix: `0x`, `0o`,
/// `0b`, or a bare leading `0` for octal. Underscores may separate digits.
fn parse_int_literal(text: &str) -> Result<i64, IntLiteralError> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'+') => (false, &text[1..]),
        Some(b'-') => (true, &text[1..]),
        _ => (false, text),
    };
    let magnitude = match parse_unsigned_literal(unsigned) {
        Ok(n) => n,
        Err(IntLiteralError::Range(_)) => {
            return Err(IntLiteralError::Range(if negative { i64::MIN } else { i64::MAX }));
        }
        Err(err) => return Err(err),
    };
    if magnitude >> 63 != 0 {
        return if negative && magnitude == 1 << 63 {
            Ok(i64::MIN)
        } else {
            Err(IntLiteralError::Range(if negative { i64::MIN } else { i64::MAX }))
        };
    }
    let n = magnitude as i64;
    Ok(if negative { -n } else { n })
}

fn parse_unsigned_literal(literal: &str) -> Result<u64, IntLiteralError> {
    let bytes = literal.as_bytes();
    if bytes.is_empty() {
        return Err(IntLiteralError::Syntax);
    }
    let (radix, digits) = match bytes {
        [b'0', prefix, _, ..] if prefix.eq_ignore_ascii_case(&b'b') => (2, &bytes[2..]),
        [b'0', prefix, _, ..] if prefix.eq_ignore_ascii_case(&b'o') => (8, &bytes[2..]),
        [b'0', prefix, _, ..] if prefix.eq_ignore_ascii_case(&b'x') => (16, &bytes[2..]),
        [b'0', ..] => (8, &bytes[1..]),
        _ => (10, bytes),
    };
    let mut n: u64 = 0;
    let mut underscores = false;
    for &b in digits {
        if b == b'_' {
            underscores = true;
            continue;
        }
        let digit = char::from(b)
            .to_digit(36)
            .filter(|&d| d < radix)
            .ok_or(IntLiteralError::Syntax)?;
        n = n
            .checked_mul(u64::from(radix))
            .and_then(|n| n.checked_add(u64::from(digit)))
            .ok_or(IntLiteralError::Range(i64::MAX))?;
    }
    if underscores && !underscores_separate_digits(literal) {
        return Err(IntLiteralError::Syntax);
    }
    Ok(n)
}

/// Every underscore sits between two digits (a base prefix counts as one).
fn underscores_separate_digits(literal: &str) -> bool {
    #[derive(PartialEq)]
    enum Saw {
        Start,
        Digit,
        Underscore,
        Other,
    }

    let bytes = literal.as_bytes();
    let mut saw = Saw::Start;
    let mut hex = false;
    let mut i = 0;
    if bytes.len() >= 2
        && bytes[0] == b'0'
        && matches!(bytes[1].to_ascii_lowercase(), b'b' | b'o' | b'x')
    {
        i = 2;
        saw = Saw::Digit;
        hex = bytes[1].eq_ignore_ascii_case(&b'x');
    }
    for &b in &bytes[i..] {
        if b.is_ascii_digit() || (hex && b.is_ascii_hexdigit()) {
            saw = Saw::Digit;
        } else if b == b'_' {
            if saw != Saw::Digit {
                return false;
            }
            saw = Saw::Underscore;
        } else if saw == Saw::Underscore {
            return false;
        } else {
            saw = Saw::Other;
        }
    }
    saw != Saw::Underscore
}
