//! Synthetic workload generation
//!
//! Uniform pseudo-random keys over a bounded key space, from a seeded
//! generator so runs are reproducible. The skew that makes caching pay
//! off comes from the key space being larger than the cache but small
//! enough that keys repeat often.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate `ops` keys drawn uniformly from `1..=key_space`.
///
/// The same seed always yields the same sequence; the seed is a
/// measurement convenience, not part of any cache contract.
pub fn generate(ops: usize, key_space: u64, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..ops).map(|_| rng.gen_range(1..=key_space)).collect()
}
