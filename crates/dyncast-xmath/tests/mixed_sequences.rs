use dyncast::Value;
use dyncast_xmath::{arithmetic, count, max, median, min, prime, round, sqrt, sum};
use time::macros::datetime;

#[test]
fn text_and_numbers_mix() {
    let values = [
        Value::from("1.5"),
        Value::from(2),
        Value::from(3.5f32),
        Value::from(true),
    ];
    assert_eq!(sum(&values), 8.0);
    assert_eq!(count(&values), 4);
    assert_eq!(min(&values), 1.0);
    assert_eq!(max(&values), 3.5);
    assert_eq!(median(&values), 2.0);
    assert_eq!(arithmetic(&values), 2.0);
}

#[test]
fn unreadable_elements_count_as_zero() {
    let values = ["4", "n/a", "2"];
    assert_eq!(sum(&values), 6.0);
    assert_eq!(min(&values), 0.0);
    assert_eq!(arithmetic(&values), 2.0);
}

#[test]
fn instants_are_epoch_seconds() {
    let values = [
        datetime!(1970-01-01 0:01 UTC),
        datetime!(1970-01-01 0:03 UTC),
    ];
    assert_eq!(arithmetic(&values), 120.0);
}

#[test]
fn integer_helpers() {
    assert_eq!(sqrt(99), 9);
    assert_eq!(prime(6), 13);
    assert_eq!(round(-0.5), -1);
    assert_eq!(round(0.49), 0);
}
