//! Error types for cachefront

use std::fmt;

/// Result type alias for cachefront operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache construction and use
///
/// A lookup for an absent key is not an error; `LruCache::get` returns
/// `None` for it so a cached value of zero stays distinguishable from
/// "not present".
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// Cache constructed with capacity zero
    ZeroCapacity,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroCapacity => write!(f, "cache capacity must be greater than zero"),
        }
    }
}

impl std::error::Error for Error {}
