//! LRU (Least Recently Used) cache engine
//!
//! Pairs a hash index with an index-linked recency list over an entry
//! arena. Entries are addressed by stable slot index, never by pointer,
//! so move-to-front and tail eviction are O(1) and relocating one entry
//! never invalidates another's locator.

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;

use crate::error::{Error, Result};

/// Arena slot: a key/value pair plus its recency-list links
struct Entry<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Fixed-capacity cache evicting the least recently used entry
///
/// Recency order runs from `head` (most recently used) to `tail`
/// (least recently used) and changes only on `get` hits and `insert`.
pub struct LruCache<K, V> {
    /// Key -> arena slot index
    index: HashMap<K, usize, RandomState>,
    /// Entry arena; vacant slots are `None` and listed in `free`
    slots: Vec<Option<Entry<K, V>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a cache holding at most `capacity` entries.
    ///
    /// Returns [`Error::ZeroCapacity`] for `capacity == 0`: a cache
    /// that must evict on every insert has no defined LRU victim.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }

        Ok(Self {
            index: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            capacity,
        })
    }

    /// Look up a key, marking it most recently used on a hit.
    ///
    /// A miss returns `None` and leaves recency order untouched.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.index.get(key)?;
        self.touch(idx);
        self.slots[idx].as_ref().map(|entry| &entry.value)
    }

    /// Insert or update a key, marking it most recently used.
    ///
    /// Updating a present key replaces its value in place and never
    /// evicts. Inserting a new key at capacity evicts the tail entry
    /// first; the evicted pair is returned so callers can account for
    /// it.
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.index.get(&key) {
            if let Some(entry) = self.slots[idx].as_mut() {
                entry.value = value;
            }
            self.touch(idx);
            return None;
        }

        let evicted = if self.index.len() == self.capacity {
            self.evict_tail()
        } else {
            None
        };

        let idx = self.acquire_slot();
        self.slots[idx] = Some(Entry {
            key: key.clone(),
            value,
            prev: None,
            next: None,
        });
        self.attach_front(idx);
        self.index.insert(key, idx);

        evicted
    }

    /// Check for a key without disturbing recency order.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Inspect the current eviction candidate without touching it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let idx = self.tail?;
        self.slots[idx].as_ref().map(|entry| (&entry.key, &entry.value))
    }

    /// Current number of cached entries
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Maximum number of entries, fixed at construction
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove the tail entry from list, index, and arena.
    fn evict_tail(&mut self) -> Option<(K, V)> {
        let idx = self.tail?;
        self.detach(idx);
        let entry = self.slots[idx].take()?;
        self.index.remove(&entry.key);
        self.free.push(idx);
        Some((entry.key, entry.value))
    }

    /// Move an occupied slot to the head of the recency list.
    fn touch(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }
        self.detach(idx);
        self.attach_front(idx);
    }

    /// Unlink a slot from the recency list, repairing its neighbors.
    fn detach(&mut self, idx: usize) {
        let (prev, next) = match self.slots[idx].as_mut() {
            Some(entry) => {
                let links = (entry.prev, entry.next);
                entry.prev = None;
                entry.next = None;
                links
            }
            None => return,
        };

        match prev {
            Some(p) => {
                if let Some(entry) = self.slots[p].as_mut() {
                    entry.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(n) => {
                if let Some(entry) = self.slots[n].as_mut() {
                    entry.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    /// Link a detached slot in as the new head.
    fn attach_front(&mut self, idx: usize) {
        let old_head = self.head;
        if let Some(entry) = self.slots[idx].as_mut() {
            entry.prev = None;
            entry.next = old_head;
        }
        if let Some(h) = old_head {
            if let Some(entry) = self.slots[h].as_mut() {
                entry.prev = Some(idx);
            }
        }
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    /// Reuse a freed arena slot or grow the arena by one.
    fn acquire_slot(&mut self) -> usize {
        match self.free.pop() {
            Some(idx) => idx,
            None => {
                self.slots.push(None);
                self.slots.len() - 1
            }
        }
    }
}
