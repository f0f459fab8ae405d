//! Layout tokenizer.
//!
//! Layouts are written in reference-time notation: each element is spelled
//! the way the reference instant `Mon Jan 2 15:04:05 MST 2006` (offset
//! `-0700`) would print it. Everything else is literal text.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OffsetStyle {
    /// `-0700`
    HourMinute,
    /// `-07:00`
    Colon,
    /// `-07`
    HourOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Element {
    LongMonth,
    Month,
    NumMonth,
    ZeroMonth,
    LongWeekday,
    Weekday,
    Day,
    UnderDay,
    ZeroDay,
    Hour,
    Hour12,
    ZeroHour12,
    Minute,
    ZeroMinute,
    Second,
    ZeroSecond,
    LongYear,
    Year,
    UpperPm,
    LowerPm,
    ZoneAbbrev,
    /// Numeric offset; a sign is mandatory.
    NumOffset(OffsetStyle),
    /// Numeric offset, or `Z` for UTC.
    IsoOffset(OffsetStyle),
    /// Exactly this many fractional digits.
    FixedFraction(usize),
    /// Fractional digits may be absent.
    OptionalFraction(usize),
}

impl Element {
    pub(crate) fn is_fraction(self) -> bool {
        matches!(
            self,
            Element::FixedFraction(_) | Element::OptionalFraction(_)
        )
    }
}

const OFFSET_SPELLINGS: [(&[u8], OffsetStyle); 3] = [
    (b"07:00", OffsetStyle::Colon),
    (b"0700", OffsetStyle::HourMinute),
    (b"07", OffsetStyle::HourOnly),
];

/// Splits `layout` into the literal text before the first element, the
/// element, and the layout after it. Without an element the whole layout is
/// literal.
pub(crate) fn next_element(layout: &str) -> (&str, Option<Element>, &str) {
    let bytes = layout.as_bytes();
    for i in 0..bytes.len() {
        let rest = &bytes[i..];
        let found = match bytes[i] {
            b'J' if rest.starts_with(b"January") => Some((Element::LongMonth, 7)),
            b'J' if rest.starts_with(b"Jan") => Some((Element::Month, 3)),
            b'M' if rest.starts_with(b"Monday") => Some((Element::LongWeekday, 6)),
            b'M' if rest.starts_with(b"Mon") => Some((Element::Weekday, 3)),
            b'M' if rest.starts_with(b"MST") => Some((Element::ZoneAbbrev, 3)),
            b'0' => match rest.get(1) {
                Some(b'1') => Some((Element::ZeroMonth, 2)),
                Some(b'2') => Some((Element::ZeroDay, 2)),
                Some(b'3') => Some((Element::ZeroHour12, 2)),
                Some(b'4') => Some((Element::ZeroMinute, 2)),
                Some(b'5') => Some((Element::ZeroSecond, 2)),
                Some(b'6') => Some((Element::Year, 2)),
                _ => None,
            },
            b'1' if rest.starts_with(b"15") => Some((Element::Hour, 2)),
            b'1' => Some((Element::NumMonth, 1)),
            b'2' if rest.starts_with(b"2006") => Some((Element::LongYear, 4)),
            b'2' => Some((Element::Day, 1)),
            b'_' if rest.starts_with(b"_2006") => {
                // A literal underscore followed by the year.
                return (&layout[..=i], Some(Element::LongYear), &layout[i + 5..]);
            }
            b'_' if rest.starts_with(b"_2") => Some((Element::UnderDay, 2)),
            b'3' => Some((Element::Hour12, 1)),
            b'4' => Some((Element::Minute, 1)),
            b'5' => Some((Element::Second, 1)),
            b'P' if rest.starts_with(b"PM") => Some((Element::UpperPm, 2)),
            b'p' if rest.starts_with(b"pm") => Some((Element::LowerPm, 2)),
            b'-' => offset_spelling(&rest[1..])
                .map(|(style, len)| (Element::NumOffset(style), len + 1)),
            b'Z' => offset_spelling(&rest[1..])
                .map(|(style, len)| (Element::IsoOffset(style), len + 1)),
            b'.' | b',' => fraction(rest),
            _ => None,
        };
        if let Some((element, len)) = found {
            return (&layout[..i], Some(element), &layout[i + len..]);
        }
    }
    (layout, None, "")
}

fn offset_spelling(rest: &[u8]) -> Option<(OffsetStyle, usize)> {
    OFFSET_SPELLINGS
        .iter()
        .find(|(spelling, _)| rest.starts_with(spelling))
        .map(|(spelling, style)| (*style, spelling.len()))
}

/// `.000` / `,999`: a separator and a run of one repeated digit that is not
/// followed by another digit (so `02.01.06` stays a date).
fn fraction(rest: &[u8]) -> Option<(Element, usize)> {
    let digit = *rest.get(1).filter(|d| matches!(d, b'0' | b'9'))?;
    let run = rest[1..].iter().take_while(|&&b| b == digit).count();
    if rest.get(1 + run).is_some_and(u8::is_ascii_digit) {
        return None;
    }
    let element = if digit == b'0' {
        Element::FixedFraction(run)
    } else {
        Element::OptionalFraction(run)
    };
    Some((element, 1 + run))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elements(mut layout: &str) -> Vec<Element> {
        let mut out = Vec::new();
        loop {
            let (_, element, rest) = next_element(layout);
            match element {
                Some(element) => out.push(element),
                None => return out,
            }
            layout = rest;
        }
    }

    #[test]
    fn splits_literal_prefix() {
        let (prefix, element, rest) = next_element("T15:04");
        assert_eq!(prefix, "T");
        assert_eq!(element, Some(Element::Hour));
        assert_eq!(rest, ":04");
    }

    #[test]
    fn dotted_dates_are_not_fractions() {
        assert_eq!(
            elements("02.01.06"),
            vec![Element::ZeroDay, Element::ZeroMonth, Element::Year]
        );
        assert_eq!(
            elements("02.01.2006 15:04:05"),
            vec![
                Element::ZeroDay,
                Element::ZeroMonth,
                Element::LongYear,
                Element::Hour,
                Element::ZeroMinute,
                Element::ZeroSecond
            ]
        );
    }

    #[test]
    fn recognizes_fractions_and_offsets() {
        assert_eq!(
            elements("2006-01-02T15:04:05.999999999Z07:00"),
            vec![
                Element::LongYear,
                Element::ZeroMonth,
                Element::ZeroDay,
                Element::Hour,
                Element::ZeroMinute,
                Element::ZeroSecond,
                Element::OptionalFraction(9),
                Element::IsoOffset(OffsetStyle::Colon)
            ]
        );
        assert_eq!(
            elements("Jan _2 15:04:05.000 -0700"),
            vec![
                Element::Month,
                Element::UnderDay,
                Element::Hour,
                Element::ZeroMinute,
                Element::ZeroSecond,
                Element::FixedFraction(3),
                Element::NumOffset(OffsetStyle::HourMinute)
            ]
        );
    }

    #[test]
    fn names_and_meridiem() {
        assert_eq!(
            elements("Monday, 02-Jan-06 3:04PM MST"),
            vec![
                Element::LongWeekday,
                Element::ZeroDay,
                Element::Month,
                Element::Year,
                Element::Hour12,
                Element::ZeroMinute,
                Element::UpperPm,
                Element::ZoneAbbrev
            ]
        );
    }

    #[test]
    fn underscore_before_year_is_literal() {
        let (prefix, element, rest) = next_element("x_2006!");
        assert_eq!(prefix, "x_");
        assert_eq!(element, Some(Element::LongYear));
        assert_eq!(rest, "!");
    }

    #[test]
    fn non_ascii_literals_pass_through() {
        let (prefix, element, rest) = next_element("année 2006");
        assert_eq!(prefix, "année ");
        assert_eq!(element, Some(Element::LongYear));
        assert_eq!(rest, "");
    }
}
