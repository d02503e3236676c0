use crate::cache::BoundedCache;
use crate::index::{DictionaryIndex, IndexHit, IndexStats};
use crate::normalize::normalize_query;

/// Default number of cached lookups
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Dictionary lookups with a recency cache in front of the index.
///
/// Misses are cached too, so repeated selections of a word the dictionary
/// does not know skip the index as well.
pub struct LookupService {
    index: DictionaryIndex,
    cache: BoundedCache<String, Option<String>>,
}

impl LookupService {
    pub fn new(index: DictionaryIndex) -> Self {
        Self::with_cache_capacity(index, DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_cache_capacity(index: DictionaryIndex, capacity: usize) -> Self {
        Self {
            index,
            cache: BoundedCache::new(capacity),
        }
    }

    pub fn lookup(&mut self, word: &str) -> Option<String> {
        let key = normalize_query(word);
        if let Some(cached) = self.cache.get(&key) {
            return cached.clone();
        }

        let result = self.index.lookup(&key).map(str::to_owned);
        self.cache.put(key, result.clone());
        result
    }

    pub fn search_prefix(&self, prefix: &str, limit: usize) -> Vec<IndexHit> {
        self.index.search_prefix(prefix, limit)
    }

    pub fn search_contains(&self, substring: &str, limit: usize) -> Vec<IndexHit> {
        self.index.search_contains(substring, limit)
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::RawEntry;

    fn service() -> LookupService {
        let mut index = DictionaryIndex::new();
        index.build([RawEntry::new(
            "document",
            "A written or printed paper that provides information.",
        )]);
        LookupService::with_cache_capacity(index, 4)
    }

    #[test]
    fn test_lookup_caches_hits_and_misses() {
        let mut service = service();

        assert!(service.lookup("Document").is_some());
        assert_eq!(service.cache_len(), 1);

        assert!(service.lookup("unknown").is_none());
        assert_eq!(service.cache_len(), 2);

        // Same normalized key, served from cache
        assert!(service.lookup("  DOCUMENT  ").is_some());
        assert_eq!(service.cache_len(), 2);
    }

    #[test]
    fn test_clear_cache() {
        let mut service = service();
        service.lookup("document");
        service.clear_cache();
        assert_eq!(service.cache_len(), 0);
        assert!(service.lookup("document").is_some());
    }
}
