use unicode_normalization::UnicodeNormalization;

/// Longest word the index accepts; anything longer is dump noise
pub const MAX_WORD_LEN: usize = 50;
/// Shortest definition worth keeping
pub const MIN_DEFINITION_LEN: usize = 10;

/// Definition text that appears verbatim on corrupted rows in the source
/// dumps; any entry carrying it is dropped wholesale
const CORRUPTED_DEFINITION: &str = "One who is turned against another";

/// A cleaned word/definition pair ready for indexing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEntry {
    pub word: String,
    pub definition: String,
}

/// Clean a raw dictionary record into a canonical entry.
///
/// Returns `None` for entries that are unusable: empty or over-long words,
/// purely numeric words, words starting with an apostrophe, raw input
/// containing backslash escapes, and definitions that are too short, equal
/// to the word itself, or known-corrupted.
pub fn normalize_entry(raw_word: &str, raw_definition: &str) -> Option<NormalizedEntry> {
    if raw_word.contains('\\') {
        return None;
    }

    let word = clean_word(raw_word);
    if word.is_empty()
        || word.chars().count() > MAX_WORD_LEN
        || word.chars().all(|c| c.is_ascii_digit())
        || word.starts_with('\'')
    {
        return None;
    }

    let definition = clean_definition(raw_definition);
    if definition.chars().count() < MIN_DEFINITION_LEN
        || definition.eq_ignore_ascii_case(&word)
        || definition.contains(CORRUPTED_DEFINITION)
    {
        return None;
    }

    Some(NormalizedEntry { word, definition })
}

/// Canonicalize a lookup query the same way stored keys are canonicalized:
/// lowercase, trimmed, everything but word characters and apostrophes
/// stripped.
pub fn normalize_query(raw: &str) -> String {
    raw.trim()
        .nfkc()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '\'')
        .collect()
}

fn clean_word(raw: &str) -> String {
    let lowered = raw.nfkc().collect::<String>().to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '\'')
        .collect();
    collapse_whitespace(&stripped)
}

fn clean_definition(raw: &str) -> String {
    // Escaped-quote artifacts left over from the source dumps
    let unescaped = raw
        .replace("\\'", "'")
        .replace("\\\"", "'")
        .replace("\\\u{2018}", "'")
        .replace("\\\u{2019}", "'");
    capitalize_first(&collapse_whitespace(&unescaped))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
