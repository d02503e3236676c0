use std::env;

use serde::{Deserialize, Serialize};

fn default_storage_path() -> String {
    "vocabulary.json".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Single named slot holding the serialized vocabulary collection
    #[serde(default = "default_storage_path")]
    pub storage_path: String,
}

impl VocabularyConfig {
    pub fn new() -> Self {
        let storage_path =
            env::var("VOCABULARY_PATH").unwrap_or_else(|_| default_storage_path());

        Self { storage_path }
    }
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
        }
    }
}
