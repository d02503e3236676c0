use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_cache_capacity() -> usize {
    100
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// External dictionary file (JSON array of word/definition records).
    /// Falls back to the embedded sample dictionary when unset.
    #[serde(default)]
    pub path: Option<String>,
    /// Capacity of the lookup cache in front of the index
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let path = env::var("DICTIONARY_PATH").ok();

        let cache_capacity = env::var("LOOKUP_CACHE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_cache_capacity);

        Self {
            enabled: default_enabled(),
            path,
            cache_capacity,
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            path: None,
            cache_capacity: default_cache_capacity(),
        }
    }
}
