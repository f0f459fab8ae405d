use smol_str::SmolStr;

use crate::datetime::format_rfc3339;
use crate::error::CoerceError;
use crate::value::Value;

pub(super) fn text_of(value: &Value) -> String {
    match value {
        Value::Nil => String::new(),
        Value::Instant(t) => format_rfc3339(*t),
        Value::Text(v) => v.to_string(),
        other => other.to_string(),
    }
}

pub(super) fn bytes_of(value: &Value) -> Vec<u8> {
    match value {
        Value::Nil => Vec::new(),
        Value::Bytes(v) => v.clone(),
        Value::Text(v) => v.as_bytes().to_vec(),
        other => other.to_string().into_bytes(),
    }
}

/// `1`/`t`/`true` and `0`/`f`/`false`, any ASCII case.
pub(super) fn parse_bool(text: &str) -> Result<bool, CoerceError> {
    match text.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Ok(true),
        "0" | "f" | "false" => Ok(false),
        _ => Err(CoerceError::InvalidBool(SmolStr::new(text))),
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::value::Duration;

    #[test]
    fn text_of_categories() {
        assert_eq!(text_of(&Value::Nil), "");
        assert_eq!(text_of(&Value::Bool(false)), "false");
        assert_eq!(text_of(&Value::from(Duration::from_mins(90))), "1h30m0s");
        assert_eq!(
            text_of(&Value::from(datetime!(2006-01-02 15:04:05 UTC))),
            "2006-01-02T15:04:05Z"
        );
        assert_eq!(text_of(&Value::from(&b"hi\xff"[..])), "hi\u{fffd}");
        assert_eq!(text_of(&Value::from(1e6)), "1e+06");
    }

    #[test]
    fn bytes_of_categories() {
        assert!(bytes_of(&Value::Nil).is_empty());
        assert_eq!(bytes_of(&Value::Bool(true)), b"true");
        assert_eq!(bytes_of(&Value::from("ab")), b"ab");
        assert_eq!(bytes_of(&Value::from(vec![0u8, 255])), vec![0u8, 255]);
        assert_eq!(bytes_of(&Value::from(-12i32)), b"-12");
    }

    #[test]
    fn bool_literals_ignore_case() {
        assert_eq!(parse_bool("TRUE"), Ok(true));
        assert_eq!(parse_bool("t"), Ok(true));
        assert_eq!(parse_bool("False"), Ok(false));
        assert_eq!(parse_bool("0"), Ok(false));
        assert!(parse_bool("yes").is_err());
        assert!(parse_bool("").is_err());
    }
}
