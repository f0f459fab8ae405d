use dyncast::datetime::{format_rfc3339, is_zero_instant, ZERO_INSTANT};
use dyncast::{
    coerce, float_from_x_string, to_bool, to_bytes, to_duration, to_float, to_int, to_string,
    to_time, to_uint, try_duration, try_float, try_int, try_time, CoerceError, Duration, Target,
    Value,
};
use time::macros::datetime;

struct Celsius(f64);

impl std::fmt::Display for Celsius {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[test]
fn rounding_is_half_up_then_truncate() {
    assert_eq!(to_int(2.5), 3);
    assert_eq!(to_int(-2.5), -2);
    assert_eq!(to_int(-0.5), 0);
    assert_eq!(to_int(2.4999), 2);
    assert_eq!(to_uint(2.5), 3);
}

#[test]
fn integer_widths_all_coerce() {
    assert_eq!(to_int(-8i8), -8);
    assert_eq!(to_int(300u16), 300);
    assert_eq!(to_int(7usize), 7);
    assert_eq!(to_uint(-1i64), u64::MAX);
    assert_eq!(to_float(-3isize), -3.0);
}

#[test]
fn bool_rules() {
    assert!(to_bool(5));
    assert!(to_bool("1"));
    assert!(to_bool("true"));
    assert!(to_bool("T"));
    assert!(!to_bool(0));
    assert!(!to_bool("false"));
    assert!(!to_bool("maybe"));
    assert!(!to_bool(Value::Nil));
}

#[test]
fn bytes_rules() {
    assert_eq!(to_bytes(true), b"true");
    assert_eq!(to_bytes(false), b"false");
    assert!(to_bytes(Value::Nil).is_empty());
    assert_eq!(to_bytes("héllo"), "héllo".as_bytes());
    assert_eq!(to_bytes(&[1u8, 2, 3]), vec![1, 2, 3]);
    assert_eq!(to_bytes(1.5), b"1.5");
}

#[test]
fn duration_rules() {
    assert_eq!(to_duration(1_000_000_000i64), Duration::from_secs(1));
    assert_eq!(to_duration("1h30m"), Duration::from_mins(90));
    assert_eq!(to_duration("1.5s"), Duration::from_millis(1500));
    assert_eq!(to_duration("-3µs"), Duration::from_micros(-3));
    assert_eq!(to_duration("3μs"), Duration::from_micros(3));
    assert_eq!(to_duration("forever"), Duration::ZERO);
    assert_eq!(to_duration(std::time::Duration::from_millis(2)), Duration::from_millis(2));
    assert!(matches!(
        try_duration("3d"),
        Err(CoerceError::UnknownDurationUnit { .. })
    ));
    assert!(matches!(
        try_duration("9999999999h"),
        Err(CoerceError::DurationOverflow(_))
    ));
}

#[test]
fn string_rules() {
    assert_eq!(to_string(Value::Nil), "");
    assert_eq!(to_string(true), "true");
    assert_eq!(to_string(42u8), "42");
    assert_eq!(to_string(0.5), "0.5");
    assert_eq!(to_string(Duration::from_mins(90)), "1h30m0s");
    assert_eq!(to_string(Duration::from_millis(2)), "2ms");
    assert_eq!(to_string(Duration::ZERO), "0s");
    assert_eq!(
        to_string(datetime!(2006-01-02 15:04:05 +02:00)),
        "2006-01-02T15:04:05+02:00"
    );
    assert_eq!(to_string(b"raw".to_vec()), "raw");
    assert_eq!(to_string(Value::opaque(Celsius(21.5))), "21.5");
}

#[test]
fn to_string_is_idempotent() {
    let values = [
        Value::from(12.25),
        Value::from(-7),
        Value::from("text"),
        Value::from(Duration::from_secs(61)),
        Value::from(datetime!(2023-03-15 10:30:00 UTC)),
    ];
    for value in values {
        let once = to_string(&value);
        assert_eq!(to_string(once.as_str()), once);
    }
}

#[test]
fn time_round_trips_rfc3339() {
    let t = datetime!(2023-03-15 10:30:00 +02:00);
    assert_eq!(to_time(format_rfc3339(t)), t);
    assert_eq!(to_time(t), t);
    assert_eq!(to_time("2006-01-02"), datetime!(2006-01-02 0:00 UTC));
    assert_eq!(to_time("2006-01-02T15:04:05Z").year(), 2006);
}

#[test]
fn time_falls_back_to_zero_instant() {
    let t = to_time("not-a-date");
    assert_eq!(t, ZERO_INSTANT);
    assert!(is_zero_instant(t));
    assert_eq!(t.year(), 1);
    assert!(matches!(
        try_time("not-a-date"),
        Err(CoerceError::UnknownTimestamp(_))
    ));
}

#[test]
fn opaque_values_coerce_through_text() {
    assert_eq!(to_float(Value::opaque(Celsius(21.5))), 21.5);
    assert_eq!(to_int(Value::opaque(Celsius(21.5))), 22);
}

#[test]
fn x_string_examples() {
    assert_eq!(float_from_x_string("1.234,56"), 1234.56);
    assert_eq!(float_from_x_string("1,234.56"), 1234.56);
    assert_eq!(float_from_x_string("1.234.567"), 1_234_567.0);
    assert_eq!(float_from_x_string("$ 19,99"), 19.99);
    assert_eq!(float_from_x_string("0x10"), 16.0);
    assert_eq!(float_from_x_string("abc"), 0.0);
    assert_eq!(float_from_x_string("1.2.3,4,5"), 0.0);
}

#[test]
fn strict_variants_agree_with_total_ones() {
    let inputs = [
        Value::from("12.5"),
        Value::from(-4),
        Value::from(3.75f32),
        Value::from(true),
        Value::from(datetime!(2001-02-03 04:05:06 UTC)),
    ];
    for value in inputs {
        assert_eq!(try_float(&value), Ok(to_float(&value)));
        assert_eq!(try_int(&value), Ok(to_int(&value)));
    }
}

#[test]
fn coerce_by_target_name() {
    let target: Target = "uint".parse().unwrap();
    assert_eq!(coerce("41.5", target), Value::Uint(42));
    assert_eq!(coerce("1h", Target::Duration), Value::Duration(Duration::from_hours(1)));
}
