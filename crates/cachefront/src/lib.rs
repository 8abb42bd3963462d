//! # cachefront
//!
//! Fixed-capacity LRU cache front for slow synchronous data sources.
//!
//! ## Architecture
//! - **Key index**: AHash-backed HashMap for O(1) lookups
//! - **Recency list**: index-linked list over an entry arena for O(1)
//!   move-to-front and O(1) tail eviction
//! - **Fetch layer**: [`CachedSource`] wraps any [`DataSource`] and
//!   serves repeated keys from memory, tracking hit/miss statistics
//!
//! The cache is single-threaded by design: a `get` hit mutates recency
//! order, so there is no useful reader/writer split. Callers that need
//! sharing must wrap the whole structure in their own lock.

#![warn(missing_docs)]

mod cached;
mod error;
mod lru;
mod source;
mod stats;

pub use cached::CachedSource;
pub use error::{Error, Result};
pub use lru::LruCache;
pub use source::{DataSource, ExpensiveSource};
pub use stats::CacheStats;
