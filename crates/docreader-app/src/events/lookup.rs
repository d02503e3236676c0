use docreader_core::index::IndexHit;
use docreader_core::lookup::LookupService;
use docreader_types::{AppEvent, DisplayResult};
use docreader_vocab::Vocabulary;
use kanal::AsyncSender;

const SEARCH_LIMIT: usize = 10;

pub async fn handle_text_selected(
    text: &str,
    lookup: &mut LookupService,
    vocabulary: &Vocabulary,
    ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::debug!("Looking up '{text}'");

    match lookup.lookup(text) {
        Some(definition) => {
            let result = to_display(text, &definition, vocabulary);
            ui_tx.send(AppEvent::ShowResults(vec![result])).await?;
        }
        None => {
            ui_tx
                .send(AppEvent::StatusUpdate(format!(
                    "No definition found for '{text}'"
                )))
                .await?;
        }
    }

    Ok(())
}

pub async fn handle_search_prefix(
    prefix: &str,
    lookup: &LookupService,
    vocabulary: &Vocabulary,
    ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let hits = lookup.search_prefix(prefix, SEARCH_LIMIT);
    send_hits(prefix, hits, vocabulary, ui_tx).await
}

pub async fn handle_search_contains(
    substring: &str,
    lookup: &LookupService,
    vocabulary: &Vocabulary,
    ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let hits = lookup.search_contains(substring, SEARCH_LIMIT);
    send_hits(substring, hits, vocabulary, ui_tx).await
}

async fn send_hits(
    query: &str,
    hits: Vec<IndexHit>,
    vocabulary: &Vocabulary,
    ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if hits.is_empty() {
        ui_tx
            .send(AppEvent::StatusUpdate(format!("No matches for '{query}'")))
            .await?;
        return Ok(());
    }

    let results = hits
        .iter()
        .map(|hit| to_display(&hit.word, &hit.definition, vocabulary))
        .collect();
    ui_tx.send(AppEvent::ShowResults(results)).await?;

    Ok(())
}

fn to_display(word: &str, definition: &str, vocabulary: &Vocabulary) -> DisplayResult {
    let saved = vocabulary.get(word);
    DisplayResult {
        word: word.to_string(),
        definition: definition.to_string(),
        saved: saved.is_some(),
        lookup_count: saved.map(|item| item.lookup_count),
    }
}
