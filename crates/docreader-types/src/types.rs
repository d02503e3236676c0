use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    TextSelected {
        text: String,
        source: TextSource,
    },
    SearchPrefix(String),
    SearchContains(String),
    SaveWord {
        word: String,
        /// Definition supplied by the caller when the word is not in the
        /// dictionary index
        definition: Option<String>,
    },
    RemoveWord(String),
    ListVocabulary,
    AiRequest(AiRequest),
    ShowResults(Vec<DisplayResult>),
    StatusUpdate(String),
}

/// Where a piece of selected text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    Selection,
    Search,
    Manual,
}

#[derive(Debug, Clone)]
pub enum AiRequest {
    Summarize {
        content: String,
    },
    Ask {
        content: String,
        question: String,
    },
    Translate {
        text: String,
        target_language: String,
    },
    Analyze {
        content: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayResult {
    pub word: String,
    pub definition: String,
    /// Whether the word is in the saved vocabulary
    pub saved: bool,
    pub lookup_count: Option<u32>,
}
