use docreader_types::{AiRequest, AppEvent, TextSource};
use kanal::AsyncSender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use crate::document::SAMPLE_DOCUMENT;

/// Reads commands from stdin and forwards them as events. Stands where a
/// text-selection gesture would in the mobile app.
pub async fn watcher_io(
    input_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    tracing::info!("Reading commands from stdin (word, /prefix q, /find q, :save, :rm, :vocab, :sum, :ask, :tr, :an)");

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.next_line() => {
                match line {
                    Ok(Some(line)) => {
                        if let Some(event) = parse_command(&line) {
                            input_tx.send(event).await?;
                        }
                    }
                    Ok(None) => {
                        tracing::info!("stdin closed");
                        break;
                    }
                    Err(e) => {
                        tracing::error!("Failed to read stdin: {e}");
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Parse a single input line into an event. Plain text is a lookup.
fn parse_command(line: &str) -> Option<AppEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(rest) = line.strip_prefix("/prefix ") {
        return Some(AppEvent::SearchPrefix(rest.trim().to_string()));
    }
    if let Some(rest) = line.strip_prefix("/find ") {
        return Some(AppEvent::SearchContains(rest.trim().to_string()));
    }

    if let Some(rest) = line.strip_prefix(":save ") {
        let mut parts = rest.trim().splitn(2, ' ');
        let word = parts.next()?.to_string();
        let definition = parts.next().map(|d| d.trim().to_string());
        return Some(AppEvent::SaveWord { word, definition });
    }
    if let Some(rest) = line.strip_prefix(":rm ") {
        return Some(AppEvent::RemoveWord(rest.trim().to_string()));
    }
    if line == ":vocab" {
        return Some(AppEvent::ListVocabulary);
    }

    if line == ":sum" {
        return Some(AppEvent::AiRequest(AiRequest::Summarize {
            content: SAMPLE_DOCUMENT.to_string(),
        }));
    }
    if let Some(question) = line.strip_prefix(":ask ") {
        return Some(AppEvent::AiRequest(AiRequest::Ask {
            content: SAMPLE_DOCUMENT.to_string(),
            question: question.trim().to_string(),
        }));
    }
    if let Some(rest) = line.strip_prefix(":tr ") {
        // Optional leading language tag, e.g. ":tr de some text"
        let (target_language, text) = match rest.trim().split_once(' ') {
            Some((lang, text)) if lang.len() == 2 => (lang.to_string(), text.to_string()),
            _ => ("es".to_string(), rest.trim().to_string()),
        };
        return Some(AppEvent::AiRequest(AiRequest::Translate {
            text,
            target_language,
        }));
    }
    if line == ":an" {
        return Some(AppEvent::AiRequest(AiRequest::Analyze {
            content: SAMPLE_DOCUMENT.to_string(),
        }));
    }

    Some(AppEvent::TextSelected {
        text: line.to_string(),
        source: TextSource::Manual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_a_lookup() {
        match parse_command("  document ") {
            Some(AppEvent::TextSelected { text, source }) => {
                assert_eq!(text, "document");
                assert_eq!(source, TextSource::Manual);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_empty_line_is_ignored() {
        assert!(parse_command("   ").is_none());
    }

    #[test]
    fn test_save_with_and_without_definition() {
        match parse_command(":save cat a small pet") {
            Some(AppEvent::SaveWord { word, definition }) => {
                assert_eq!(word, "cat");
                assert_eq!(definition.as_deref(), Some("a small pet"));
            }
            other => panic!("unexpected event: {other:?}"),
        }

        match parse_command(":save cat") {
            Some(AppEvent::SaveWord { word, definition }) => {
                assert_eq!(word, "cat");
                assert!(definition.is_none());
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_searches() {
        assert!(matches!(
            parse_command("/prefix doc"),
            Some(AppEvent::SearchPrefix(p)) if p == "doc"
        ));
        assert!(matches!(
            parse_command("/find men"),
            Some(AppEvent::SearchContains(s)) if s == "men"
        ));
    }

    #[test]
    fn test_translate_language_tag() {
        match parse_command(":tr de a document") {
            Some(AppEvent::AiRequest(AiRequest::Translate {
                text,
                target_language,
            })) => {
                assert_eq!(target_language, "de");
                assert_eq!(text, "a document");
            }
            other => panic!("unexpected event: {other:?}"),
        }

        match parse_command(":tr a mobile document") {
            Some(AppEvent::AiRequest(AiRequest::Translate {
                target_language, ..
            })) => assert_eq!(target_language, "es"),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
