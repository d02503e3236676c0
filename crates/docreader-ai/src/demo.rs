//! Deterministic stand-in generators used when the remote AI service is
//! unreachable. Pure functions of their input so the same request always
//! produces the same demo result.

use crate::types::{Analysis, Answer, Summary, SummaryLength, Translation};

const FALLBACK_SUMMARY: &str = "This document contains important information about the topic.";

/// Join the first few substantial sentences of the content
pub fn demo_summary(content: &str, length: SummaryLength) -> Summary {
    let sentences: Vec<&str> = content
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() > 20)
        .collect();

    let take = match length {
        SummaryLength::Brief => 2,
        SummaryLength::Standard => 3,
        SummaryLength::Detailed => 4,
    };

    let summary = if sentences.is_empty() {
        FALLBACK_SUMMARY.to_string()
    } else {
        let mut joined = sentences
            .iter()
            .take(take)
            .copied()
            .collect::<Vec<_>>()
            .join(". ");
        joined.push('.');
        joined
    };

    Summary {
        word_count: summary.split_whitespace().count(),
        summary,
        confidence: 0.85,
    }
}

/// Canned answer bucketed by the question's interrogative
pub fn demo_answer(question: &str) -> Answer {
    let question = question.to_lowercase();

    let answer = if question.contains("what") {
        "Based on the document content, this appears to be related to document reading and mobile application features."
    } else if question.contains("how") {
        "The process involves using advanced technology to provide an enhanced user experience with AI-powered features."
    } else if question.contains("why") {
        "This approach offers benefits such as improved efficiency, better user experience, and innovative functionality."
    } else {
        "The document provides relevant information about this topic. For more detailed answers, please upgrade to premium."
    };

    Answer {
        answer: answer.to_string(),
        confidence: 0.80,
        source_pages: vec![1],
        context_used: 500,
    }
}

/// Bracket-tagged naive word substitution
pub fn demo_translation(text: &str, target_language: &str) -> Translation {
    let lowered = text.to_lowercase();

    let translated_text = match target_language {
        "es" => format!(
            "[ES] {}",
            lowered.replace("document", "documento").replace("mobile", "m\u{f3}vil")
        ),
        "fr" => format!("[FR] {lowered}"),
        "de" => format!(
            "[DE] {}",
            lowered.replace("document", "dokument").replace("mobile", "mobil")
        ),
        other => format!("[{}] {text}", other.to_uppercase()),
    };

    Translation {
        translated_text,
        detected_language: "en".to_string(),
        target_language: target_language.to_string(),
        confidence: 0.90,
        character_count: text.chars().count(),
    }
}

/// Word/sentence/paragraph counts plus fixed topic and sentiment guesses
pub fn demo_analysis(content: &str) -> Analysis {
    let word_count = content.split_whitespace().count();
    let sentence_count = content
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();
    let paragraph_count = content.split("\n\n").count();

    // Reading speed of 200 words per minute, rounded, at least one minute
    let reading_time_minutes = (((word_count as f64) / 200.0).round() as usize).max(1);

    Analysis {
        word_count,
        sentence_count,
        paragraph_count,
        reading_time_minutes,
        complexity_level: if word_count > 500 { "Complex" } else { "Moderate" }.to_string(),
        key_topics: vec![
            "Document".to_string(),
            "Technology".to_string(),
            "Mobile".to_string(),
            "Application".to_string(),
        ],
        sentiment: "Positive".to_string(),
        language_detected: "English".to_string(),
    }
}
