use smol_str::SmolStr;
use time::OffsetDateTime;

use crate::datetime::parse_known;
use crate::error::CoerceError;
use crate::value::{Duration, Value};

use super::numeric::int_of;
use super::text::text_of;

pub(super) fn instant_of(value: &Value) -> Result<OffsetDateTime, CoerceError> {
    let text = text_of(value);
    parse_known(&text).ok_or_else(|| CoerceError::UnknownTimestamp(SmolStr::from(text)))
}

/// Numbers are nanosecond counts; everything else goes through the
/// duration literal parser.
pub(super) fn duration_of(value: &Value) -> Result<Duration, CoerceError> {
    match value {
        Value::Int(_) | Value::Uint(_) | Value::Float32(_) | Value::Float(_) => {
            int_of(value).map(Duration::from_nanos)
        }
        Value::Duration(d) => Ok(*d),
        _ => text_of(value).parse(),
    }
}
