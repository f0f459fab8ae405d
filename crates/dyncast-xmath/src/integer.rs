#![allow(missing_docs)]

/// Floor of the square root, computed digit by digit. Negative input gives 0.
#[must_use]
pub fn sqrt(n: i64) -> i64 {
    if n <= 0 {
        return 0;
    }
    let mut rem = n;
    let mut root = 0i64;
    let mut bit = 1i64 << 62;
    while bit > rem {
        bit >>= 2;
    }
    while bit != 0 {
        let trial = root | bit;
        root >>= 1;
        if rem >= trial {
            rem -= trial;
            root |= bit;
        }
        bit >>= 2;
    }
    root
}

/// The `n`-th prime, counting from 1 (`prime(1) == 2`).
///
/// # Panics
///
/// Panics if `n` is 0.
#[must_use]
pub fn prime(n: usize) -> u64 {
    assert!(n > 0, "primes are counted from 1");
    let mut primes: Vec<u64> = Vec::with_capacity(n);
    primes.push(2);
    let mut candidate: u64 = 3;
    while primes.len() < n {
        let limit = i64::try_from(candidate).map_or(u64::MAX, |c| sqrt(c).unsigned_abs());
        let composite = primes
            .iter()
            .take_while(|&&p| p <= limit)
            .any(|&p| candidate % p == 0);
        if !composite {
            primes.push(candidate);
        }
        candidate += 2;
    }
    primes[n - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrt_floors() {
        assert_eq!(sqrt(0), 0);
        assert_eq!(sqrt(1), 1);
        assert_eq!(sqrt(15), 3);
        assert_eq!(sqrt(16), 4);
        assert_eq!(sqrt(17), 4);
        assert_eq!(sqrt(1 << 40), 1 << 20);
        assert_eq!(sqrt(i64::MAX), 3_037_000_499);
    }

    #[test]
    fn sqrt_of_negative_is_zero() {
        assert_eq!(sqrt(-4), 0);
        assert_eq!(sqrt(i64::MIN), 0);
    }

    #[test]
    fn nth_prime() {
        let first: Vec<u64> = (1..=10).map(prime).collect();
        assert_eq!(first, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert_eq!(prime(100), 541);
        assert_eq!(prime(1000), 7919);
    }

    #[test]
    #[should_panic(expected = "counted from 1")]
    fn zeroth_prime_panics() {
        let _ = prime(0);
    }
}
