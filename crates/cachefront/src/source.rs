//! Backing data source seam
//!
//! The cache front treats the slow store behind it as an opaque
//! synchronous function of the key. Anything implementing
//! [`DataSource`] can sit behind a [`crate::CachedSource`]; tests
//! substitute counting stubs, the benchmark uses [`ExpensiveSource`].

use std::hint::black_box;

/// A synchronous, deterministic-per-key source of values
///
/// Each call is assumed expensive (disk, network, or heavy compute).
/// The cache layer never retries or masks failures: a panic here
/// propagates unchanged to the caller.
pub trait DataSource {
    /// Produce the value for `key`.
    fn fetch(&mut self, key: u64) -> i64;
}

/// Number of multiply-accumulate steps per simulated fetch
const WORK_PER_FETCH: u64 = 50_000;

/// CPU-burning stand-in for a slow disk or network source
///
/// Deterministic for a given key, with a fixed amount of arithmetic
/// per call so uncached and cached runs are comparable.
#[derive(Debug, Default)]
pub struct ExpensiveSource;

impl ExpensiveSource {
    /// Create a new simulated slow source.
    pub fn new() -> Self {
        Self
    }
}

impl DataSource for ExpensiveSource {
    fn fetch(&mut self, key: u64) -> i64 {
        let mut sum: i64 = 0;
        for i in 0..WORK_PER_FETCH {
            // black_box keeps the optimizer from collapsing the loop
            // into a closed form; the cost per call must stay fixed.
            sum = sum.wrapping_add(black_box(key as i64).wrapping_mul(i as i64));
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_is_deterministic() {
        let mut source = ExpensiveSource::new();

        let first = source.fetch(7);
        let second = source.fetch(7);

        assert_eq!(first, second);
    }

    #[test]
    fn test_distinct_keys_distinct_values() {
        let mut source = ExpensiveSource::new();

        assert_ne!(source.fetch(1), source.fetch(2));
    }

    #[test]
    fn test_key_zero() {
        let mut source = ExpensiveSource::new();

        assert_eq!(source.fetch(0), 0);
    }
}
