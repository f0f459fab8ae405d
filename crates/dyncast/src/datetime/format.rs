use time::{OffsetDateTime, UtcOffset};

fn date_part(t: OffsetDateTime) -> String {
    let year = t.year();
    let month = u8::from(t.month());
    let day = t.day();
    if year < 0 {
        format!("-{:04}-{month:02}-{day:02}", year.unsigned_abs())
    } else {
        format!("{year:04}-{month:02}-{day:02}")
    }
}

fn offset_parts(offset: UtcOffset) -> (char, u8, u8) {
    let sign = if offset.is_negative() { '-' } else { '+' };
    let (hours, minutes, _) = offset.as_hms();
    (sign, hours.unsigned_abs(), minutes.unsigned_abs())
}

/// RFC 3339 at second precision, `Z` for a zero offset.
#[must_use]
pub fn format_rfc3339(t: OffsetDateTime) -> String {
    let zone = if t.offset().is_utc() {
        "Z".to_string()
    } else {
        let (sign, hours, minutes) = offset_parts(t.offset());
        format!("{sign}{hours:02}:{minutes:02}")
    };
    format!(
        "{}T{:02}:{:02}:{:02}{zone}",
        date_part(t),
        t.hour(),
        t.minute(),
        t.second()
    )
}

/// Default rendering: `2006-01-02 15:04:05.5 +0000 UTC`.
///
/// Fractional seconds drop trailing zeros and vanish when zero. Offsets
/// without a zone name repeat the numeric offset in the name position.
#[must_use]
pub fn format_default(t: OffsetDateTime) -> String {
    let mut out = format!(
        "{} {:02}:{:02}:{:02}",
        date_part(t),
        t.hour(),
        t.minute(),
        t.second()
    );
    let nanos = t.nanosecond();
    if nanos != 0 {
        let fraction = format!("{nanos:09}");
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    let (sign, hours, minutes) = offset_parts(t.offset());
    let numeric = format!("{sign}{hours:02}{minutes:02}");
    let name = if t.offset().is_utc() { "UTC" } else { numeric.as_str() };
    out.push_str(&format!(" {numeric} {name}"));
    out
}
