use serde::{Deserialize, Serialize};

use self::ai::AiConfig;
use self::dictionary::DictionaryConfig;
use self::vocabulary::VocabularyConfig;

pub mod ai;
pub mod dictionary;
pub mod vocabulary;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub vocabulary: VocabularyConfig,
    pub ai: AiConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            dictionary: DictionaryConfig::new(),
            vocabulary: VocabularyConfig::new(),
            ai: AiConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
