//! Cache statistics tracking

/// Counters for cache performance tracking
///
/// Plain owned fields of the cache front; the cache is single-threaded
/// and exclusively owned, so no atomics are involved. All counters are
/// monotone until [`CacheStats::reset`].
#[derive(Debug, Default, Clone)]
pub struct CacheStats {
    hits: u64,
    misses: u64,
    evictions: u64,
    inserts: u64,
}

impl CacheStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cache hit.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Record a cache miss.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Record an eviction.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Record an insert.
    pub fn record_insert(&mut self) {
        self.inserts += 1;
    }

    /// Total lookups answered from the cache
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Total lookups that fell through to the backing source
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Total entries evicted under capacity pressure
    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    /// Total entries inserted into the cache
    pub fn inserts(&self) -> u64 {
        self.inserts
    }

    /// Hit ratio over all lookups so far, 0.0 when none have happened.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Reset every counter to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_start_at_zero() {
        let stats = CacheStats::new();

        assert_eq!(stats.hits(), 0);
        assert_eq!(stats.misses(), 0);
        assert_eq!(stats.evictions(), 0);
        assert_eq!(stats.inserts(), 0);
        assert_eq!(stats.hit_ratio(), 0.0);
    }

    #[test]
    fn test_stats_counting() {
        let mut stats = CacheStats::new();

        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        stats.record_insert();
        stats.record_eviction();

        assert_eq!(stats.hits(), 2);
        assert_eq!(stats.misses(), 1);
        assert_eq!(stats.inserts(), 1);
        assert_eq!(stats.evictions(), 1);
        assert_eq!(stats.hit_ratio(), 2.0 / 3.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = CacheStats::new();

        stats.record_hit();
        stats.record_miss();
        stats.reset();

        assert_eq!(stats.hits(), 0);
        assert_eq!(stats.misses(), 0);
        assert_eq!(stats.hit_ratio(), 0.0);
    }
}
