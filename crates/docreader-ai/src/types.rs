use serde::{Deserialize, Serialize};

/// How a reply was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyMode {
    Live,
    Demo,
}

/// Outcome of a feature call. The result is always usable: when the remote
/// service fails, `result` holds a locally generated fallback and `error`
/// carries what went wrong.
#[derive(Debug, Clone)]
pub struct GatewayReply<T> {
    pub result: T,
    pub mode: ReplyMode,
    pub error: Option<String>,
}

impl<T> GatewayReply<T> {
    pub fn live(result: T) -> Self {
        Self {
            result,
            mode: ReplyMode::Live,
            error: None,
        }
    }

    pub fn demo(result: T) -> Self {
        Self {
            result,
            mode: ReplyMode::Demo,
            error: None,
        }
    }

    pub fn fallback(result: T, error: String) -> Self {
        Self {
            result,
            mode: ReplyMode::Demo,
            error: Some(error),
        }
    }

    pub fn is_demo(&self) -> bool {
        self.mode == ReplyMode::Demo
    }

    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryLength {
    Brief,
    #[default]
    Standard,
    Detailed,
}

impl SummaryLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryLength::Brief => "brief",
            SummaryLength::Standard => "standard",
            SummaryLength::Detailed => "detailed",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SummaryOptions {
    pub length: SummaryLength,
    pub max_words: u32,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            length: SummaryLength::default(),
            max_words: 200,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct QuestionOptions {
    pub context_length: u32,
}

impl Default for QuestionOptions {
    fn default() -> Self {
        Self {
            context_length: 500,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TranslateOptions {
    pub source_language: String,
    pub target_language: String,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            source_language: "auto".to_string(),
            target_language: "es".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub summary: String,
    pub word_count: usize,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    pub confidence: f64,
    #[serde(default)]
    pub source_pages: Vec<u32>,
    #[serde(default)]
    pub context_used: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub translated_text: String,
    pub detected_language: String,
    pub target_language: String,
    pub confidence: f64,
    pub character_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub reading_time_minutes: usize,
    pub complexity_level: String,
    pub key_topics: Vec<String>,
    pub sentiment: String,
    pub language_detected: String,
}
