use std::hash::Hash;
use std::num::NonZeroUsize;

use lru::LruCache;

/// Bounded key -> value cache with least-recently-used eviction.
///
/// Purely in-memory; sits in front of dictionary lookups so repeated
/// selections of the same word skip the index.
pub struct BoundedCache<K: Hash + Eq, V> {
    inner: LruCache<K, V>,
}

impl<K: Hash + Eq, V> BoundedCache<K, V> {
    /// A zero capacity is clamped to one
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: LruCache::new(capacity),
        }
    }

    /// Hit promotes the key to most-recently-used
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    /// Insert or refresh; at capacity the least-recently-used entry is
    /// evicted first
    pub fn put(&mut self, key: K, value: V) {
        self.inner.put(key, value);
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
