use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::VocabularyError;
use crate::storage::VocabularyStorage;

pub const EXPORT_VERSION: &str = "1.0";

/// A user-saved word with usage metadata. At most one item exists per
/// normalized word; re-saving bumps the counters instead of duplicating.
/// Serialized with camelCase keys, the storage-slot and export wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    pub word: String,
    pub definition: String,
    pub saved_at: DateTime<Utc>,
    pub last_accessed: DateTime<Utc>,
    pub lookup_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyExport {
    pub export_date: DateTime<Utc>,
    pub version: String,
    pub total_words: usize,
    pub words: Vec<VocabularyItem>,
}

#[derive(Debug, Clone)]
pub struct VocabularyStats {
    pub total_words: usize,
    /// Saved within the last 7 days
    pub recent_words: usize,
    /// Saved within the last 30 days
    pub monthly_words: usize,
    pub total_lookups: u64,
    pub average_lookups: f64,
    pub oldest_word: Option<VocabularyItem>,
    pub newest_word: Option<VocabularyItem>,
}

/// Persisted, deduplicated collection of saved words.
///
/// Every mutation rewrites the storage slot synchronously. A single logical
/// actor mutates the store, so last-writer-wins is sufficient.
pub struct Vocabulary {
    items: HashMap<String, VocabularyItem>,
    storage: Box<dyn VocabularyStorage>,
}

impl Vocabulary {
    /// Open the store and load whatever the slot holds. Missing or corrupt
    /// data starts an empty collection, never an error.
    pub fn open(storage: Box<dyn VocabularyStorage>) -> Self {
        let mut vocabulary = Self {
            items: HashMap::new(),
            storage,
        };
        vocabulary.load();
        vocabulary
    }

    fn load(&mut self) {
        self.items.clear();

        let bytes = match self.storage.load() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!("Failed to read vocabulary storage: {e}");
                return;
            }
        };

        match serde_json::from_slice::<Vec<VocabularyItem>>(&bytes) {
            Ok(saved) => {
                for item in saved {
                    self.items.insert(item.word.clone(), item);
                }
                tracing::info!("Loaded {} saved words", self.items.len());
            }
            Err(e) => tracing::warn!("Discarding unreadable vocabulary data: {e}"),
        }
    }

    fn persist(&self) {
        let items: Vec<&VocabularyItem> = self.items.values().collect();
        match serde_json::to_vec(&items) {
            Ok(bytes) => {
                if let Err(e) = self.storage.save(&bytes) {
                    tracing::error!("Failed to persist vocabulary: {e}");
                }
            }
            Err(e) => tracing::error!("Failed to serialize vocabulary: {e}"),
        }
    }

    /// Save a word. An existing item gets its lookup count bumped and its
    /// last-accessed time refreshed; the stored definition is kept.
    pub fn save_word(&mut self, word: &str, definition: &str) -> bool {
        let key = normalize_key(word);
        if key.is_empty() {
            return false;
        }

        let now = Utc::now();
        match self.items.get_mut(&key) {
            Some(existing) => {
                existing.lookup_count += 1;
                existing.last_accessed = now;
            }
            None => {
                self.items.insert(
                    key.clone(),
                    VocabularyItem {
                        word: key,
                        definition: definition.to_string(),
                        saved_at: now,
                        last_accessed: now,
                        lookup_count: 1,
                    },
                );
            }
        }

        self.persist();
        true
    }

    /// Remove a word; persists only when something was actually removed
    pub fn remove_word(&mut self, word: &str) -> bool {
        let removed = self.items.remove(&normalize_key(word)).is_some();
        if removed {
            self.persist();
        }
        removed
    }

    pub fn is_saved(&self, word: &str) -> bool {
        self.items.contains_key(&normalize_key(word))
    }

    pub fn get(&self, word: &str) -> Option<&VocabularyItem> {
        self.items.get(&normalize_key(word))
    }

    pub fn all(&self) -> Vec<VocabularyItem> {
        self.items.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Case-insensitive match on word or definition. Exact word matches
    /// rank first, then descending lookup count; ties keep scan order.
    pub fn search(&self, query: &str, limit: usize) -> Vec<VocabularyItem> {
        let needle = normalize_key(query);

        let mut results = Vec::new();
        for item in self.items.values() {
            if item.word.contains(&needle) || item.definition.to_lowercase().contains(&needle) {
                results.push(item.clone());
                if results.len() >= limit {
                    break;
                }
            }
        }

        results.sort_by(|a, b| {
            let a_exact = a.word == needle;
            let b_exact = b.word == needle;
            b_exact
                .cmp(&a_exact)
                .then(b.lookup_count.cmp(&a.lookup_count))
        });
        results
    }

    /// Most recently saved first
    pub fn recent(&self, limit: usize) -> Vec<VocabularyItem> {
        let mut words = self.all();
        words.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        words.truncate(limit);
        words
    }

    /// Most looked-up first
    pub fn frequent(&self, limit: usize) -> Vec<VocabularyItem> {
        let mut words = self.all();
        words.sort_by(|a, b| b.lookup_count.cmp(&a.lookup_count));
        words.truncate(limit);
        words
    }

    pub fn stats(&self) -> VocabularyStats {
        let now = Utc::now();
        let week_ago = now - Duration::days(7);
        let month_ago = now - Duration::days(30);

        let total_words = self.items.len();
        let total_lookups: u64 = self
            .items
            .values()
            .map(|w| u64::from(w.lookup_count))
            .sum();

        VocabularyStats {
            total_words,
            recent_words: self.items.values().filter(|w| w.saved_at > week_ago).count(),
            monthly_words: self
                .items
                .values()
                .filter(|w| w.saved_at > month_ago)
                .count(),
            total_lookups,
            average_lookups: if total_words > 0 {
                total_lookups as f64 / total_words as f64
            } else {
                0.0
            },
            oldest_word: self.items.values().min_by_key(|w| w.saved_at).cloned(),
            newest_word: self.items.values().max_by_key(|w| w.saved_at).cloned(),
        }
    }

    /// Versioned JSON snapshot of the full collection
    pub fn export(&self) -> Result<String, VocabularyError> {
        let mut words = self.all();
        words.sort_by(|a, b| a.word.cmp(&b.word));

        let snapshot = VocabularyExport {
            export_date: Utc::now(),
            version: EXPORT_VERSION.to_string(),
            total_words: words.len(),
            words,
        };

        Ok(serde_json::to_string_pretty(&snapshot)?)
    }

    /// Merge a previously exported snapshot into the collection. The
    /// top-level shape must carry a `words` array; items missing a word or
    /// definition are skipped. Returns how many items were imported.
    pub fn import(&mut self, json: &str) -> Result<usize, VocabularyError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let words = value
            .get("words")
            .and_then(|w| w.as_array())
            .ok_or(VocabularyError::InvalidFormat)?;

        let now = Utc::now();
        let mut imported = 0;

        for raw in words {
            let word = raw.get("word").and_then(|v| v.as_str()).unwrap_or("");
            let definition = raw.get("definition").and_then(|v| v.as_str()).unwrap_or("");
            if word.is_empty() || definition.is_empty() {
                continue;
            }

            let saved_at = parse_timestamp(raw.get("savedAt")).unwrap_or(now);
            let last_accessed = parse_timestamp(raw.get("lastAccessed")).unwrap_or(saved_at);
            let lookup_count = raw
                .get("lookupCount")
                .and_then(|v| v.as_u64())
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(1)
                .max(1);

            self.items.insert(
                word.to_string(),
                VocabularyItem {
                    word: word.to_string(),
                    definition: definition.to_string(),
                    saved_at,
                    last_accessed,
                    lookup_count,
                },
            );
            imported += 1;
        }

        self.persist();
        Ok(imported)
    }

    /// Empty the collection and remove the persisted slot
    pub fn clear(&mut self) {
        self.items.clear();
        if let Err(e) = self.storage.clear() {
            tracing::warn!("Failed to clear vocabulary storage: {e}");
        }
    }
}

fn normalize_key(word: &str) -> String {
    word.trim().to_lowercase()
}

fn parse_timestamp(value: Option<&serde_json::Value>) -> Option<DateTime<Utc>> {
    value.and_then(|v| serde_json::from_value(v.clone()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store() -> Vocabulary {
        Vocabulary::open(Box::new(MemoryStorage::new()))
    }

    #[test]
    fn test_save_word_twice_bumps_count_keeps_definition() {
        let mut vocab = store();
        assert!(vocab.save_word("cat", "a small pet"));
        assert!(vocab.save_word("cat", "a different definition"));

        assert_eq!(vocab.len(), 1);
        let item = vocab.get("cat").unwrap();
        assert_eq!(item.lookup_count, 2);
        assert_eq!(item.definition, "a small pet");
        assert!(item.last_accessed >= item.saved_at);
    }

    #[test]
    fn test_save_word_normalizes_key() {
        let mut vocab = store();
        vocab.save_word("  Cat ", "a small pet");
        assert!(vocab.is_saved("cat"));
        assert!(vocab.is_saved("CAT"));
        assert_eq!(vocab.get("cat").unwrap().word, "cat");
    }

    #[test]
    fn test_save_blank_word_is_rejected() {
        let mut vocab = store();
        assert!(!vocab.save_word("   ", "a definition"));
        assert!(vocab.is_empty());
    }

    #[test]
    fn test_remove_word() {
        let mut vocab = store();
        vocab.save_word("cat", "a small pet");

        assert!(vocab.remove_word("Cat"));
        assert!(!vocab.remove_word("cat"));
        assert!(vocab.is_empty());
    }

    #[test]
    fn test_persistence_round_trip() {
        let storage = std::sync::Arc::new(MemoryStorage::new());

        let mut vocab = Vocabulary::open(Box::new(storage.clone()));
        vocab.save_word("cat", "a small pet");
        vocab.save_word("dog", "a loyal companion");
        vocab.save_word("cat", "ignored");
        drop(vocab);

        let reloaded = Vocabulary::open(Box::new(storage));
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get("cat").unwrap().lookup_count, 2);
        assert_eq!(reloaded.get("cat").unwrap().definition, "a small pet");
    }

    #[test]
    fn test_corrupt_storage_starts_empty() {
        let storage = MemoryStorage::with_bytes(b"{not valid json".to_vec());
        let vocab = Vocabulary::open(Box::new(storage));
        assert!(vocab.is_empty());
    }

    #[test]
    fn test_search_ranking() {
        let mut vocab = store();
        vocab.save_word("cat", "a small pet");
        vocab.save_word("catalog", "a list of items such as a cat registry");
        vocab.save_word("category", "a class or division of things");
        vocab.save_word("catalog", "ignored");
        vocab.save_word("catalog", "ignored");

        let results = vocab.search("cat", 10);
        assert_eq!(results.len(), 3);
        // Exact match first despite lower lookup count
        assert_eq!(results[0].word, "cat");
        assert_eq!(results[1].word, "catalog");
    }

    #[test]
    fn test_search_matches_definitions() {
        let mut vocab = store();
        vocab.save_word("ephemeral", "lasting for a very short time");
        let results = vocab.search("short time", 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].word, "ephemeral");
    }

    #[test]
    fn test_recent_and_frequent() {
        let mut vocab = store();
        vocab.save_word("one", "the first word saved here");
        vocab.save_word("two", "the second word saved here");
        vocab.save_word("two", "ignored");
        vocab.save_word("two", "ignored");

        let frequent = vocab.frequent(1);
        assert_eq!(frequent.len(), 1);
        assert_eq!(frequent[0].word, "two");

        let recent = vocab.recent(10);
        assert_eq!(recent.len(), 2);
    }

    #[test]
    fn test_stats() {
        let mut vocab = store();
        let empty = vocab.stats();
        assert_eq!(empty.total_words, 0);
        assert_eq!(empty.total_lookups, 0);
        assert!(empty.oldest_word.is_none());
        assert!(empty.newest_word.is_none());

        vocab.save_word("cat", "a small pet");
        vocab.save_word("cat", "ignored");
        vocab.save_word("dog", "a loyal companion");

        let stats = vocab.stats();
        assert_eq!(stats.total_words, 2);
        assert_eq!(stats.recent_words, 2);
        assert_eq!(stats.monthly_words, 2);
        assert_eq!(stats.total_lookups, 3);
        assert!((stats.average_lookups - 1.5).abs() < f64::EPSILON);
        assert!(stats.oldest_word.is_some());
        assert!(stats.newest_word.is_some());
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut vocab = store();
        vocab.save_word("cat", "a small pet");
        vocab.save_word("cat", "ignored");
        vocab.save_word("dog", "a loyal companion");

        let snapshot = vocab.export().unwrap();

        let mut restored = store();
        let imported = restored.import(&snapshot).unwrap();
        assert_eq!(imported, 2);
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.get("cat").unwrap().lookup_count, 2);
        assert_eq!(restored.get("cat").unwrap().definition, "a small pet");
        assert_eq!(restored.get("dog").unwrap().lookup_count, 1);
    }

    #[test]
    fn test_import_rejects_bad_shape() {
        let mut vocab = store();
        vocab.save_word("cat", "a small pet");

        assert!(matches!(
            vocab.import(r#"{"version": "1.0"}"#),
            Err(VocabularyError::InvalidFormat)
        ));
        assert!(vocab.import("not json").is_err());
        // Nothing was touched
        assert_eq!(vocab.len(), 1);
    }

    #[test]
    fn test_import_skips_incomplete_items() {
        let mut vocab = store();
        let imported = vocab
            .import(
                r#"{"words": [
                    {"word": "cat", "definition": "a small pet"},
                    {"word": "no definition"},
                    {"definition": "no word"},
                    {"word": "", "definition": "empty word"}
                ]}"#,
            )
            .unwrap();

        assert_eq!(imported, 1);
        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab.get("cat").unwrap().lookup_count, 1);
    }

    #[test]
    fn test_clear_empties_collection_and_slot() {
        let storage = std::sync::Arc::new(MemoryStorage::new());

        let mut vocab = Vocabulary::open(Box::new(storage.clone()));
        vocab.save_word("cat", "a small pet");
        vocab.clear();
        assert!(vocab.is_empty());
        assert!(storage.load().unwrap().is_none());

        let reopened = Vocabulary::open(Box::new(storage));
        assert!(reopened.is_empty());
    }
}
