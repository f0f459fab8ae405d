//! Parsing text against a reference-time layout.

use smol_str::SmolStr;
use thiserror::Error;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

use super::layout::{next_element, Element, OffsetStyle};

const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const LONG_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const SHORT_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const LONG_DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Why text did not fit a layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("cannot parse '{found}' as '{expected}'")]
    Mismatch { expected: SmolStr, found: SmolStr },
    #[error("{0} out of range")]
    OutOfRange(&'static str),
    #[error("extra text '{0}'")]
    ExtraText(SmolStr),
}

impl LayoutError {
    fn mismatch(expected: &str, found: &[u8]) -> Self {
        LayoutError::Mismatch {
            expected: SmolStr::new(expected),
            found: lossy(found),
        }
    }
}

fn lossy(bytes: &[u8]) -> SmolStr {
    SmolStr::new(String::from_utf8_lossy(bytes))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Calendar fields collected while walking the layout.
#[derive(Debug, Default)]
struct Fields {
    year: i32,
    month: Option<u8>,
    day: Option<u8>,
    hour: u8,
    minute: u8,
    second: u8,
    nanos: u32,
    meridiem: Option<Meridiem>,
    utc: bool,
    offset: Option<i32>,
    named_offset: Option<i32>,
}

/// Parses `text` with a reference-time `layout`.
///
/// Elements the layout lacks default to year 0, January 1, midnight, UTC.
/// Zone abbreviations other than `UTC` and `GMT±h` resolve to a zero offset.
pub fn parse_with_layout(layout: &str, text: &str) -> Result<OffsetDateTime, LayoutError> {
    let mut fields = Fields::default();
    let mut layout = layout;
    let mut value = text.as_bytes();
    loop {
        let (prefix, element, rest) = next_element(layout);
        value = skip_literal(value, prefix.as_bytes())
            .ok_or_else(|| LayoutError::mismatch(prefix, value))?;
        let Some(element) = element else {
            if !value.is_empty() {
                return Err(LayoutError::ExtraText(lossy(value)));
            }
            break;
        };
        let spelled = &layout[prefix.len()..layout.len() - rest.len()];
        layout = rest;
        value = fields
            .consume(element, value, layout)
            .map_err(|miss| match miss {
                Miss::Mismatch => LayoutError::mismatch(spelled, value),
                Miss::Range(what) => LayoutError::OutOfRange(what),
            })?;
    }
    fields.finish()
}

/// Literal text matches byte-for-byte, except that a run of layout spaces
/// matches a run of one or more input spaces.
fn skip_literal<'a>(mut value: &'a [u8], mut prefix: &[u8]) -> Option<&'a [u8]> {
    while let Some((&expected, rest)) = prefix.split_first() {
        if expected == b' ' {
            if value.first().is_some_and(|&b| b != b' ') {
                return None;
            }
            prefix = trim_spaces(prefix);
            value = trim_spaces(value);
            continue;
        }
        let (&found, value_rest) = value.split_first()?;
        if found != expected {
            return None;
        }
        prefix = rest;
        value = value_rest;
    }
    Some(value)
}

fn trim_spaces(bytes: &[u8]) -> &[u8] {
    let spaces = bytes.iter().take_while(|&&b| b == b' ').count();
    &bytes[spaces..]
}

/// The caller knows which layout element was being read.
#[derive(Debug, Clone, Copy)]
enum Miss {
    Mismatch,
    Range(&'static str),
}

type Step<'a> = Result<&'a [u8], Miss>;

impl Fields {
    fn consume<'a>(&mut self, element: Element, value: &'a [u8], layout_rest: &str) -> Step<'a> {
        match element {
            Element::Year => {
                let (year, rest) = number(value, true).ok_or(Miss::Mismatch)?;
                let year = i32::from(year);
                self.year = if year >= 69 { 1900 + year } else { 2000 + year };
                Ok(rest)
            }
            Element::LongYear => {
                if value.len() < 4 || !value[..4].iter().all(u8::is_ascii_digit) {
                    return Err(Miss::Mismatch);
                }
                self.year = value[..4]
                    .iter()
                    .fold(0, |acc, d| acc * 10 + i32::from(d - b'0'));
                Ok(&value[4..])
            }
            Element::Month | Element::LongMonth => {
                let names = if element == Element::Month {
                    &SHORT_MONTHS
                } else {
                    &LONG_MONTHS
                };
                let (index, rest) = lookup(names, value).ok_or(Miss::Mismatch)?;
                self.month = u8::try_from(index + 1).ok();
                Ok(rest)
            }
            Element::NumMonth | Element::ZeroMonth => {
                let (month, rest) =
                    number(value, element == Element::ZeroMonth).ok_or(Miss::Mismatch)?;
                if !(1..=12).contains(&month) {
                    return Err(Miss::Range("month"));
                }
                self.month = Some(month);
                Ok(rest)
            }
            Element::Weekday => Ok(lookup(&SHORT_DAYS, value).ok_or(Miss::Mismatch)?.1),
            Element::LongWeekday => Ok(lookup(&LONG_DAYS, value).ok_or(Miss::Mismatch)?.1),
            Element::Day | Element::UnderDay | Element::ZeroDay => {
                let value = match value {
                    [b' ', rest @ ..] if element == Element::UnderDay => rest,
                    _ => value,
                };
                let (day, rest) =
                    number(value, element == Element::ZeroDay).ok_or(Miss::Mismatch)?;
                self.day = Some(day);
                Ok(rest)
            }
            Element::Hour => {
                let (hour, rest) = number(value, false).ok_or(Miss::Mismatch)?;
                if hour >= 24 {
                    return Err(Miss::Range("hour"));
                }
                self.hour = hour;
                Ok(rest)
            }
            Element::Hour12 | Element::ZeroHour12 => {
                let (hour, rest) =
                    number(value, element == Element::ZeroHour12).ok_or(Miss::Mismatch)?;
                if hour > 12 {
                    return Err(Miss::Range("hour"));
                }
                self.hour = hour;
                Ok(rest)
            }
            Element::Minute | Element::ZeroMinute => {
                let (minute, rest) =
                    number(value, element == Element::ZeroMinute).ok_or(Miss::Mismatch)?;
                if minute >= 60 {
                    return Err(Miss::Range("minute"));
                }
                self.minute = minute;
                Ok(rest)
            }
            Element::Second | Element::ZeroSecond => {
                let (second, rest) =
                    number(value, element == Element::ZeroSecond).ok_or(Miss::Mismatch)?;
                if second >= 60 {
                    return Err(Miss::Range("second"));
                }
                self.second = second;
                // Fractional seconds in the input are fine even when the
                // layout has none, unless a fraction element comes next.
                let next_is_fraction = next_element(layout_rest)
                    .1
                    .is_some_and(Element::is_fraction);
                match fraction_len(rest) {
                    Some(len) if !next_is_fraction => {
                        self.nanos = parse_nanos(&rest[..len]).ok_or(Miss::Mismatch)?;
                        Ok(&rest[len..])
                    }
                    _ => Ok(rest),
                }
            }
            Element::UpperPm | Element::LowerPm => {
                let (marker, rest) = value.split_at_checked(2).ok_or(Miss::Mismatch)?;
                self.meridiem = match (marker, element == Element::UpperPm) {
                    (b"PM", true) | (b"pm", false) => Some(Meridiem::Pm),
                    (b"AM", true) | (b"am", false) => Some(Meridiem::Am),
                    _ => return Err(Miss::Mismatch),
                };
                Ok(rest)
            }
            Element::IsoOffset(_) if value.first() == Some(&b'Z') => {
                self.utc = true;
                Ok(&value[1..])
            }
            Element::IsoOffset(style) | Element::NumOffset(style) => {
                let (offset, rest) = parse_offset(style, value)?;
                self.offset = Some(offset);
                Ok(rest)
            }
            Element::ZoneAbbrev => {
                if value.starts_with(b"UTC") {
                    self.utc = true;
                    return Ok(&value[3..]);
                }
                let (len, offset) = zone_abbrev(value).ok_or(Miss::Mismatch)?;
                self.named_offset = Some(offset);
                Ok(&value[len..])
            }
            Element::FixedFraction(digits) => {
                let len = 1 + digits;
                if value.len() < len {
                    return Err(Miss::Mismatch);
                }
                self.nanos = parse_nanos(&value[..len]).ok_or(Miss::Mismatch)?;
                Ok(&value[len..])
            }
            Element::OptionalFraction(_) => match fraction_len(value) {
                Some(len) => {
                    self.nanos = parse_nanos(&value[..len]).ok_or(Miss::Mismatch)?;
                    Ok(&value[len..])
                }
                None => Ok(value),
            },
        }
    }

    fn finish(self) -> Result<OffsetDateTime, LayoutError> {
        let hour = match self.meridiem {
            Some(Meridiem::Pm) if self.hour < 12 => self.hour + 12,
            Some(Meridiem::Am) if self.hour == 12 => 0,
            _ => self.hour,
        };
        let month = Month::try_from(self.month.unwrap_or(1))
            .map_err(|_| LayoutError::OutOfRange("month"))?;
        let date = Date::from_calendar_date(self.year, month, self.day.unwrap_or(1))
            .map_err(|_| LayoutError::OutOfRange("day"))?;
        let time = Time::from_hms_nano(hour, self.minute, self.second, self.nanos)
            .map_err(|_| LayoutError::OutOfRange("hour"))?;
        let seconds = if self.utc {
            0
        } else {
            self.offset.or(self.named_offset).unwrap_or(0)
        };
        let offset = UtcOffset::from_whole_seconds(seconds)
            .map_err(|_| LayoutError::OutOfRange("time zone offset"))?;
        Ok(PrimitiveDateTime::new(date, time).assume_offset(offset))
    }
}

/// One or two digits; zero-padded elements need exactly two.
fn number(value: &[u8], padded: bool) -> Option<(u8, &[u8])> {
    let first = value.first().filter(|b| b.is_ascii_digit())? - b'0';
    match value.get(1) {
        Some(second) if second.is_ascii_digit() => {
            Some((first * 10 + (second - b'0'), &value[2..]))
        }
        _ if padded => None,
        _ => Some((first, &value[1..])),
    }
}

/// Index of the first name that prefixes `value`, ignoring ASCII case.
fn lookup<'a>(names: &[&str], value: &'a [u8]) -> Option<(usize, &'a [u8])> {
    names.iter().enumerate().find_map(|(index, name)| {
        let (head, rest) = value.split_at_checked(name.len())?;
        head.eq_ignore_ascii_case(name.as_bytes())
            .then_some((index, rest))
    })
}

fn is_separator(byte: u8) -> bool {
    byte == b'.' || byte == b','
}

/// Length of a separator plus digit run at the start of `value`.
fn fraction_len(value: &[u8]) -> Option<usize> {
    match value {
        [sep, digit, ..] if is_separator(*sep) && digit.is_ascii_digit() => {
            Some(1 + value[1..].iter().take_while(|b| b.is_ascii_digit()).count())
        }
        _ => None,
    }
}

/// Separator followed by digits; only the first nine digits count.
fn parse_nanos(fraction: &[u8]) -> Option<u32> {
    let (&sep, digits) = fraction.split_first()?;
    if !is_separator(sep) {
        return None;
    }
    let digits = &digits[..digits.len().min(9)];
    if !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let nanos = digits
        .iter()
        .fold(0u32, |acc, d| acc * 10 + u32::from(d - b'0'));
    Some(nanos * 10u32.pow(9 - digits.len() as u32))
}

fn parse_offset(style: OffsetStyle, value: &[u8]) -> Result<(i32, &[u8]), Miss> {
    let (sign, hours, minutes, rest) = match style {
        OffsetStyle::Colon if value.len() >= 6 && value[3] == b':' => {
            (value[0], &value[1..3], &value[4..6], &value[6..])
        }
        OffsetStyle::HourMinute if value.len() >= 5 => {
            (value[0], &value[1..3], &value[3..5], &value[5..])
        }
        OffsetStyle::HourOnly if value.len() >= 3 => {
            (value[0], &value[1..3], &b"00"[..], &value[3..])
        }
        _ => return Err(Miss::Mismatch),
    };
    let (hours, _) = number(hours, true).ok_or(Miss::Mismatch)?;
    let (minutes, _) = number(minutes, true).ok_or(Miss::Mismatch)?;
    if hours > 24 {
        return Err(Miss::Range("time zone offset hour"));
    }
    if minutes > 60 {
        return Err(Miss::Range("time zone offset minute"));
    }
    let seconds = (i32::from(hours) * 60 + i32::from(minutes)) * 60;
    match sign {
        b'+' => Ok((seconds, rest)),
        b'-' => Ok((-seconds, rest)),
        _ => Err(Miss::Mismatch),
    }
}

/// Length of a zone abbreviation at the start of `value`, with its offset.
fn zone_abbrev(value: &[u8]) -> Option<(usize, i32)> {
    if value.len() < 3 {
        return None;
    }
    if value.starts_with(b"ChST") || value.starts_with(b"MeST") {
        return Some((4, 0));
    }
    if value.starts_with(b"GMT") {
        return Some(match signed_hours(&value[3..]) {
            Some((len, hours)) => (3 + len, hours * 3600),
            None => (3, 0),
        });
    }
    if matches!(value[0], b'+' | b'-') {
        return signed_hours(value).map(|(len, _)| (len, 0));
    }
    let upper = value
        .iter()
        .take(6)
        .take_while(|b| b.is_ascii_uppercase())
        .count();
    match upper {
        3 => Some((3, 0)),
        4 if value[3] == b'T' || value.starts_with(b"WITA") => Some((4, 0)),
        5 if value[4] == b'T' => Some((5, 0)),
        _ => None,
    }
}

/// `+h`/`-hh` with at most 23 hours.
fn signed_hours(value: &[u8]) -> Option<(usize, i32)> {
    let (&sign, rest) = value.split_first()?;
    let negative = match sign {
        b'+' => false,
        b'-' => true,
        _ => return None,
    };
    let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let hours = rest[..digits].iter().try_fold(0i32, |acc, d| {
        acc.checked_mul(10)?.checked_add(i32::from(d - b'0'))
    })?;
    if hours > 23 {
        return None;
    }
    Some((1 + digits, if negative { -hours } else { hours }))
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn rfc3339_with_offset() {
        let t =
            parse_with_layout("2006-01-02T15:04:05Z07:00", "2023-03-15T10:30:00+02:00").unwrap();
        assert_eq!(t, datetime!(2023-03-15 10:30:00 +02:00));
        assert_eq!(t.offset().whole_seconds(), 7200);
    }

    #[test]
    fn z_means_utc() {
        let t = parse_with_layout("2006-01-02T15:04:05Z07:00", "2023-03-15T10:30:00Z").unwrap();
        assert_eq!(t, datetime!(2023-03-15 10:30:00 UTC));
        assert!(t.offset().is_utc());
    }

    #[test]
    fn optional_fraction_accepts_any_precision() {
        let layout = "2006-01-02T15:04:05.999999999Z07:00";
        let t = parse_with_layout(layout, "2023-03-15T10:30:00.5Z").unwrap();
        assert_eq!(t.nanosecond(), 500_000_000);
        let t = parse_with_layout(layout, "2023-03-15T10:30:00Z").unwrap();
        assert_eq!(t.nanosecond(), 0);
        let t = parse_with_layout(layout, "2023-03-15T10:30:00.1234567891Z").unwrap();
        assert_eq!(t.nanosecond(), 123_456_789);
    }

    #[test]
    fn fixed_fraction_requires_exact_digits() {
        let layout = "Jan _2 15:04:05.000";
        let t = parse_with_layout(layout, "Feb  3 04:05:06.789").unwrap();
        assert_eq!(t, datetime!(0000-02-03 04:05:06.789 UTC));
        assert!(parse_with_layout(layout, "Feb  3 04:05:06.78").is_err());
        assert!(parse_with_layout(layout, "Feb  3 04:05:06.7891").is_err());
    }

    #[test]
    fn input_fraction_after_seconds_is_accepted() {
        let t = parse_with_layout("2006-01-02 15:04:05", "2023-03-15 10:30:00.25").unwrap();
        assert_eq!(t.nanosecond(), 250_000_000);
    }

    #[test]
    fn missing_date_parts_default_to_year_zero() {
        let t = parse_with_layout("3:04PM", "3:04PM").unwrap();
        assert_eq!(t, datetime!(0000-01-01 15:04 UTC));
        let t = parse_with_layout("3:04PM", "12:30AM").unwrap();
        assert_eq!(t, datetime!(0000-01-01 00:30 UTC));
    }

    #[test]
    fn two_digit_years_pivot_at_69() {
        let t = parse_with_layout("01/02/06", "12/31/68").unwrap();
        assert_eq!(t.year(), 2068);
        let t = parse_with_layout("01/02/06", "01/01/69").unwrap();
        assert_eq!(t.year(), 1969);
    }

    #[test]
    fn names_ignore_case_and_weekday_is_not_checked() {
        let t = parse_with_layout(
            "Mon, 02 Jan 2006 15:04:05 -0700",
            "fri, 02 JAN 2006 15:04:05 -0700",
        )
        .unwrap();
        assert_eq!(t, datetime!(2006-01-02 15:04:05 -07:00));
    }

    #[test]
    fn zone_abbreviations() {
        let layout = "Mon Jan _2 15:04:05 MST 2006";
        let t = parse_with_layout(layout, "Mon Jan  2 15:04:05 UTC 2006").unwrap();
        assert!(t.offset().is_utc());
        let t = parse_with_layout(layout, "Mon Jan  2 15:04:05 CEST 2006").unwrap();
        assert_eq!(t, datetime!(2006-01-02 15:04:05 UTC));
        let t = parse_with_layout(layout, "Mon Jan  2 15:04:05 GMT+3 2006").unwrap();
        assert_eq!(t.offset().whole_hours(), 3);
        assert!(parse_with_layout(layout, "Mon Jan  2 15:04:05 Xy 2006").is_err());
    }

    #[test]
    fn spaces_in_layout_match_runs_of_spaces() {
        let t = parse_with_layout("2006-01-02 15:04", "2023-03-15    10:30").unwrap();
        assert_eq!(t, datetime!(2023-03-15 10:30 UTC));
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert_eq!(
            parse_with_layout("2006-01-02", "2023-13-01"),
            Err(LayoutError::OutOfRange("month"))
        );
        assert_eq!(
            parse_with_layout("2006-01-02", "2023-02-30"),
            Err(LayoutError::OutOfRange("day"))
        );
        assert_eq!(
            parse_with_layout("2006-01-02 15:04", "2023-02-03 24:00"),
            Err(LayoutError::OutOfRange("hour"))
        );
        assert!(parse_with_layout("2006-01-02", "2024-02-29").is_ok());
    }

    #[test]
    fn rejects_trailing_and_short_input() {
        assert_eq!(
            parse_with_layout("2006-01-02", "2023-03-15x"),
            Err(LayoutError::ExtraText("x".into()))
        );
        assert!(matches!(
            parse_with_layout("2006-01-02", "2023-3-15"),
            Err(LayoutError::Mismatch { .. })
        ));
        assert!(parse_with_layout("2006-01-02", "").is_err());
    }

    #[test]
    fn non_ascii_input_does_not_panic() {
        assert!(parse_with_layout("2006-01-02", "2023-0€-15").is_err());
        assert!(parse_with_layout("Mon Jan _2", "Mé").is_err());
    }
}
