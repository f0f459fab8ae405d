//! Each function reads its elements with [`dyncast::to_float`]; elements
//! that do not read as numbers count as 0.

#![allow(missing_docs)]

use dyncast::{to_float, Value};

fn floats<T: Clone + Into<Value>>(values: &[T]) -> impl Iterator<Item = f64> + '_ {
    values.iter().cloned().map(to_float)
}

fn first_and_rest<'a, T: Clone + Into<Value>>(
    values: &'a [T],
    what: &str,
) -> (f64, impl Iterator<Item = f64> + 'a) {
    let mut iter = floats(values);
    let Some(first) = iter.next() else {
        panic!("{what} of an empty sequence");
    };
    (first, iter)
}

#[must_use]
pub fn count<T>(values: &[T]) -> usize {
    values.len()
}

/// 0.0 for an empty sequence.
#[must_use]
pub fn sum<T: Clone + Into<Value>>(values: &[T]) -> f64 {
    floats(values).sum()
}

/// # Panics
///
/// Panics if `values` is empty.
#[must_use]
pub fn min<T: Clone + Into<Value>>(values: &[T]) -> f64 {
    let (first, rest) = first_and_rest(values, "min");
    rest.fold(first, |min, v| if v < min { v } else { min })
}

/// # Panics
///
/// Panics if `values` is empty.
#[must_use]
pub fn max<T: Clone + Into<Value>>(values: &[T]) -> f64 {
    let (first, rest) = first_and_rest(values, "max");
    rest.fold(first, |max, v| if v > max { v } else { max })
}

/// Element at index `len / 2` after sorting: the middle one, or the upper of
/// the two middle ones when the length is even.
///
/// # Panics
///
/// Panics if `values` is empty.
#[must_use]
pub fn median<T: Clone + Into<Value>>(values: &[T]) -> f64 {
    assert!(!values.is_empty(), "median of an empty sequence");
    let mut sorted: Vec<f64> = floats(values).collect();
    sorted.sort_by(f64::total_cmp);
    sorted[sorted.len() / 2]
}

/// Sum divided by count; NaN for an empty sequence.
#[must_use]
pub fn arithmetic<T: Clone + Into<Value>>(values: &[T]) -> f64 {
    sum(values) / values.len() as f64
}

/// Count divided by the sum of reciprocals; NaN for an empty sequence.
#[must_use]
pub fn harmonic<T: Clone + Into<Value>>(values: &[T]) -> f64 {
    let reciprocals: f64 = floats(values).map(|v| 1.0 / v).sum();
    values.len() as f64 / reciprocals
}

/// N-th root of the product; 1.0 for an empty sequence.
#[must_use]
pub fn geometric<T: Clone + Into<Value>>(values: &[T]) -> f64 {
    let product: f64 = floats(values).product();
    product.powf(1.0 / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_and_count() {
        assert_eq!(sum(&[1, 2, 3]), 6.0);
        assert_eq!(sum::<f64>(&[]), 0.0);
        assert_eq!(count(&["a", "b"]), 2);
    }

    #[test]
    fn extrema() {
        assert_eq!(min(&[3.0, -1.5, 2.0]), -1.5);
        assert_eq!(max(&[3.0, -1.5, 2.0]), 3.0);
        assert_eq!(min(&[7]), 7.0);
    }

    #[test]
    #[should_panic(expected = "min of an empty sequence")]
    fn min_of_nothing_panics() {
        let _ = min::<i32>(&[]);
    }

    #[test]
    #[should_panic(expected = "median of an empty sequence")]
    fn median_of_nothing_panics() {
        let _ = median::<i32>(&[]);
    }

    #[test]
    fn median_of_odd_and_even_lengths() {
        assert_eq!(median(&[5, 1, 3]), 3.0);
        assert_eq!(median(&[4, 1, 3, 2]), 3.0);
        assert_eq!(median(&[1, 2, 3, 4]), 3.0);
        assert_eq!(median(&[10.0, -1.0]), 10.0);
        assert_eq!(median(&[2.0]), 2.0);
    }

    #[test]
    fn means() {
        assert_eq!(arithmetic(&[1, 2, 3, 4]), 2.5);
        assert_eq!(harmonic(&[1.0, 2.0, 4.0]), 3.0 / 1.75);
        assert!((geometric(&[2.0, 8.0]) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn empty_means() {
        assert!(arithmetic::<f64>(&[]).is_nan());
        assert!(harmonic::<f64>(&[]).is_nan());
        assert_eq!(geometric::<f64>(&[]), 1.0);
    }
}
