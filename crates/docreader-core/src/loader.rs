use std::path::Path;

use crate::error::LoadError;
use crate::index::{DictionaryIndex, RawEntry};

pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Build an index from the bundled sample dictionary
    pub fn load_embedded() -> Result<DictionaryIndex, LoadError> {
        let json = include_str!("../data/dictionary_en.json");
        tracing::info!("Loading embedded dictionary...");
        let index = Self::from_json(json)?;
        tracing::info!("Loaded {} dictionary entries", index.stats().total_entries);
        Ok(index)
    }

    /// Load a dictionary from a JSON file (array of word/definition records)
    pub fn load_from_file(path: &Path) -> Result<DictionaryIndex, LoadError> {
        tracing::info!("Loading dictionary from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let index = Self::from_json(&json)?;
        tracing::info!(
            "Loaded {} dictionary entries from file",
            index.stats().total_entries
        );
        Ok(index)
    }

    /// Parse a JSON array of raw records and build an index from it.
    /// Records that fail to deserialize or normalize are skipped.
    pub fn from_json(json: &str) -> Result<DictionaryIndex, LoadError> {
        let records: Vec<serde_json::Value> = serde_json::from_str(json)?;
        let total = records.len();

        let entries = records
            .into_iter()
            .filter_map(|value| serde_json::from_value::<RawEntry>(value).ok());

        let mut index = DictionaryIndex::new();
        let inserted = index.build(entries);
        tracing::info!("Indexed {} valid entries from {} records", inserted, total);

        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_skips_malformed_records() {
        let json = r#"[
            {"word": "reader", "definition": "A person who reads or a device that reads."},
            {"word": "no definition field"},
            {"definition": "No word field on this record at all."},
            42,
            {"word": "viewer", "definition": "A program for displaying files."}
        ]"#;

        let index = DictionaryLoader::from_json(json).unwrap();
        assert_eq!(index.stats().total_entries, 2);
        assert!(index.lookup("reader").is_some());
        assert!(index.lookup("viewer").is_some());
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(DictionaryLoader::from_json(r#"{"word": "x"}"#).is_err());
        assert!(DictionaryLoader::from_json("not json at all").is_err());
    }

    #[test]
    fn test_load_embedded() {
        let index = DictionaryLoader::load_embedded().unwrap();
        let stats = index.stats();
        assert!(stats.loaded);
        assert!(stats.total_entries > 0);
        assert!(index.lookup("document").is_some());
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = DictionaryLoader::load_from_file(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
