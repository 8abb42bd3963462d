//! CachedSource: LRU cache front over a backing data source

use crate::error::Result;
use crate::lru::LruCache;
use crate::source::DataSource;
use crate::stats::CacheStats;

/// A [`DataSource`] front that serves repeated keys from memory
///
/// Observationally identical to calling the backing source directly
/// (the source is assumed deterministic per key), except that hot keys
/// skip the expensive call. Values are only ever dropped by LRU
/// eviction; nothing here invalidates on staleness.
pub struct CachedSource<S> {
    /// The slow backing source, consulted only on misses
    source: S,

    /// LRU cache over previously fetched values
    cache: LruCache<u64, i64>,

    /// Hit/miss/eviction counters
    stats: CacheStats,
}

impl<S: DataSource> CachedSource<S> {
    /// Wrap `source` with an LRU cache holding up to `capacity` values.
    ///
    /// Fails with [`crate::Error::ZeroCapacity`] when `capacity` is 0.
    pub fn new(source: S, capacity: usize) -> Result<Self> {
        Ok(Self {
            source,
            cache: LruCache::new(capacity)?,
            stats: CacheStats::new(),
        })
    }

    /// Fetch the value for `key`, from cache when possible.
    ///
    /// Exactly one of the hit/miss counters is incremented per call,
    /// and the key becomes the most recently used entry either way.
    pub fn fetch(&mut self, key: u64) -> i64 {
        if let Some(&value) = self.cache.get(&key) {
            self.stats.record_hit();
            return value;
        }

        self.stats.record_miss();
        let value = self.source.fetch(key);

        // No admission filter: every miss is cached, even one-shot keys.
        if self.cache.insert(key, value).is_some() {
            self.stats.record_eviction();
        }
        self.stats.record_insert();

        value
    }

    /// Lookups answered without touching the backing source
    pub fn hits(&self) -> u64 {
        self.stats.hits()
    }

    /// Lookups that fell through to the backing source
    pub fn misses(&self) -> u64 {
        self.stats.misses()
    }

    /// Full counter set
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Current number of cached values
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Cache capacity, fixed at construction
    pub fn capacity(&self) -> usize {
        self.cache.capacity()
    }
}
