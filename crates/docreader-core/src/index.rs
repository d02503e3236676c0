use std::collections::HashMap;

use serde::Deserialize;

use crate::normalize::{normalize_entry, normalize_query};

/// Raw dictionary record as it appears in the bundled JSON assets
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    pub word: String,
    pub definition: String,
}

impl RawEntry {
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexHit {
    pub word: String,
    pub definition: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    pub total_entries: usize,
    pub loaded: bool,
}

/// In-memory word -> definition mapping, built once at startup and
/// read-only afterwards
#[derive(Debug, Default)]
pub struct DictionaryIndex {
    entries: HashMap<String, String>,
    loaded: bool,
}

impl DictionaryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and insert raw records. The first occurrence of a word
    /// wins; later duplicates are silently dropped. Building an already
    /// built index is a no-op. Returns the number of entries inserted.
    pub fn build<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = RawEntry>,
    {
        if self.loaded {
            return 0;
        }

        let mut inserted = 0;
        for raw in entries {
            let Some(entry) = normalize_entry(&raw.word, &raw.definition) else {
                continue;
            };
            if !self.entries.contains_key(&entry.word) {
                self.entries.insert(entry.word, entry.definition);
                inserted += 1;
            }
        }

        self.loaded = true;
        inserted
    }

    /// Exact lookup by normalized word. A miss is retried with apostrophes
    /// stripped so contractions resolve either way ("don't" vs "dont").
    /// Returns `None` when the index has not been built.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        if !self.loaded {
            tracing::warn!("Dictionary lookup before index build");
            return None;
        }

        let key = normalize_query(word);
        if let Some(definition) = self.entries.get(&key) {
            return Some(definition);
        }

        let without_apostrophes: String = key.chars().filter(|c| *c != '\'').collect();
        self.entries.get(&without_apostrophes).map(String::as_str)
    }

    /// All entries whose word starts with the prefix, up to `limit`
    pub fn search_prefix(&self, prefix: &str, limit: usize) -> Vec<IndexHit> {
        let needle = prefix.trim().to_lowercase();
        self.scan(limit, |word| word.starts_with(&needle))
    }

    /// All entries whose word contains the substring, up to `limit`
    pub fn search_contains(&self, substring: &str, limit: usize) -> Vec<IndexHit> {
        let needle = substring.trim().to_lowercase();
        self.scan(limit, |word| word.contains(&needle))
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            total_entries: self.entries.len(),
            loaded: self.loaded,
        }
    }

    fn scan(&self, limit: usize, matches: impl Fn(&str) -> bool) -> Vec<IndexHit> {
        if !self.loaded {
            return Vec::new();
        }

        let mut results = Vec::new();
        for (word, definition) in &self.entries {
            if matches(word) {
                results.push(IndexHit {
                    word: word.clone(),
                    definition: definition.clone(),
                });
                if results.len() >= limit {
                    break;
                }
            }
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> DictionaryIndex {
        let mut index = DictionaryIndex::new();
        index.build([
            RawEntry::new("document", "A written or printed paper that provides information."),
            RawEntry::new("dog", "A domesticated carnivorous mammal."),
            RawEntry::new("dont", "A contraction meaning do not."),
        ]);
        index
    }

    #[test]
    fn test_lookup_before_build_returns_none() {
        let index = DictionaryIndex::new();
        assert_eq!(index.lookup("document"), None);
        assert!(index.search_prefix("doc", 5).is_empty());
    }

    #[test]
    fn test_build_is_idempotent() {
        let mut index = sample_index();
        let reinserted = index.build([RawEntry::new(
            "extra",
            "A word that must not appear after a second build.",
        )]);
        assert_eq!(reinserted, 0);
        assert_eq!(index.lookup("extra"), None);
        assert_eq!(index.stats().total_entries, 3);
    }

    #[test]
    fn test_duplicate_first_seen_wins() {
        let mut index = DictionaryIndex::new();
        index.build([
            RawEntry::new("x", "First one here, kept as canonical."),
            RawEntry::new("x", "Second one here, silently dropped."),
        ]);
        assert_eq!(
            index.lookup("x"),
            Some("First one here, kept as canonical.")
        );
        assert_eq!(index.stats().total_entries, 1);
    }

    #[test]
    fn test_contraction_fallback() {
        let index = sample_index();
        assert_eq!(index.lookup("Don't"), index.lookup("dont"));
        assert!(index.lookup("don't").is_some());
    }

    #[test]
    fn test_search_prefix_excludes_non_matches() {
        let index = sample_index();
        let hits = index.search_prefix("doc", 5);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].word, "document");
    }

    #[test]
    fn test_search_contains() {
        let index = sample_index();
        let hits = index.search_contains("o", 10);
        assert_eq!(hits.len(), 3);

        let limited = index.search_contains("o", 2);
        assert_eq!(limited.len(), 2);
    }

    #[test]
    fn test_stats() {
        let index = sample_index();
        let stats = index.stats();
        assert!(stats.loaded);
        assert_eq!(stats.total_entries, 3);
    }

    #[test]
    fn test_invalid_entries_are_skipped() {
        let mut index = DictionaryIndex::new();
        let inserted = index.build([
            RawEntry::new("42", "Purely numeric words are rejected."),
            RawEntry::new("valid", "A word that passes every check."),
        ]);
        assert_eq!(inserted, 1);
        assert_eq!(index.lookup("42"), None);
    }
}
