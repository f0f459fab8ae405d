//! Timestamp layouts, parsing and rendering.
//!
//! Text is turned into an instant by trying [`LAYOUTS`] in order. Layouts
//! use reference-time notation, see [`parse_with_layout`].

#![allow(missing_docs)]

mod format;
mod layout;
mod parse;

pub use format::{format_default, format_rfc3339};
pub use parse::{parse_with_layout, LayoutError};

use time::macros::datetime;
use time::OffsetDateTime;
use tracing::debug;

pub const ANSIC: &str = "Mon Jan _2 15:04:05 2006";
pub const UNIX_DATE: &str = "Mon Jan _2 15:04:05 MST 2006";
pub const RUBY_DATE: &str = "Mon Jan 02 15:04:05 -0700 2006";
pub const RFC822: &str = "02 Jan 06 15:04 MST";
pub const RFC822Z: &str = "02 Jan 06 15:04 -0700";
pub const RFC850: &str = "Monday, 02-Jan-06 15:04:05 MST";
pub const RFC1123: &str = "Mon, 02 Jan 2006 15:04:05 MST";
pub const RFC1123Z: &str = "Mon, 02 Jan 2006 15:04:05 -0700";
pub const RFC3339: &str = "2006-01-02T15:04:05Z07:00";
pub const RFC3339_NANO: &str = "2006-01-02T15:04:05.999999999Z07:00";
pub const KITCHEN: &str = "3:04PM";
pub const STAMP: &str = "Jan _2 15:04:05";
pub const STAMP_MILLI: &str = "Jan _2 15:04:05.000";
pub const STAMP_MICRO: &str = "Jan _2 15:04:05.000000";
pub const STAMP_NANO: &str = "Jan _2 15:04:05.000000000";

/// Every layout tried by the timestamp coercion, in priority order.
pub const LAYOUTS: [&str; 31] = [
    ANSIC,
    UNIX_DATE,
    RUBY_DATE,
    RFC822,
    RFC822Z,
    RFC850,
    RFC1123,
    RFC1123Z,
    RFC3339,
    RFC3339_NANO,
    KITCHEN,
    STAMP,
    STAMP_MILLI,
    STAMP_MICRO,
    STAMP_NANO,
    "02.01.06",
    "01/02/06",
    "2006-01-02",
    "2006/01/02",
    "01/02/2006",
    "02.01.2006",
    "01/02/06 15:04",
    "2006-01-02 15:04",
    "2006-01-02T15:04",
    "01/02/2006 15:04",
    "02.01.06 15:04:05",
    "01/02/06 15:04:05",
    "01/02/2006 15:04:05",
    "2006-01-02 15:04:05",
    "2006-01-02T15:04:05",
    "02.01.2006 15:04:05",
];

/// Result of a failed timestamp coercion: January 1 of year 1, UTC.
pub const ZERO_INSTANT: OffsetDateTime = datetime!(0001-01-01 0:00 UTC);

#[must_use]
pub fn is_zero_instant(t: OffsetDateTime) -> bool {
    t == ZERO_INSTANT
}

/// First layout of [`LAYOUTS`] that accepts `text`.
pub fn parse_known(text: &str) -> Option<OffsetDateTime> {
    let parsed = LAYOUTS
        .iter()
        .find_map(|layout| parse_with_layout(layout, text).ok());
    if parsed.is_none() {
        debug!(text, "no timestamp layout matched");
    }
    parsed
}
