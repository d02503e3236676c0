use docreader_core::lookup::LookupService;
use docreader_types::{AppEvent, DisplayResult};
use docreader_vocab::Vocabulary;
use kanal::AsyncSender;

const LIST_LIMIT: usize = 20;

/// Save a word with an explicit definition, or fall back to the dictionary
pub async fn handle_save_word(
    word: &str,
    definition: Option<String>,
    lookup: &mut LookupService,
    vocabulary: &mut Vocabulary,
    ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let definition = match definition {
        Some(definition) => definition,
        None => match lookup.lookup(word) {
            Some(definition) => definition,
            None => {
                ui_tx
                    .send(AppEvent::StatusUpdate(format!(
                        "'{word}' is not in the dictionary; provide a definition with :save {word} <definition>"
                    )))
                    .await?;
                return Ok(());
            }
        },
    };

    let message = if vocabulary.save_word(word, &definition) {
        let count = vocabulary.get(word).map(|item| item.lookup_count).unwrap_or(1);
        tracing::info!("Saved '{word}' (lookup count {count})");
        format!("Saved '{word}' (x{count})")
    } else {
        format!("Could not save '{word}'")
    };
    ui_tx.send(AppEvent::StatusUpdate(message)).await?;

    Ok(())
}

pub async fn handle_remove_word(
    word: &str,
    vocabulary: &mut Vocabulary,
    ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let message = if vocabulary.remove_word(word) {
        format!("Removed '{word}'")
    } else {
        format!("'{word}' was not saved")
    };
    ui_tx.send(AppEvent::StatusUpdate(message)).await?;

    Ok(())
}

pub async fn handle_list_vocabulary(
    vocabulary: &Vocabulary,
    ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if vocabulary.is_empty() {
        ui_tx
            .send(AppEvent::StatusUpdate("No saved words yet".to_string()))
            .await?;
        return Ok(());
    }

    let results: Vec<DisplayResult> = vocabulary
        .recent(LIST_LIMIT)
        .into_iter()
        .map(|item| DisplayResult {
            word: item.word,
            definition: item.definition,
            saved: true,
            lookup_count: Some(item.lookup_count),
        })
        .collect();
    ui_tx.send(AppEvent::ShowResults(results)).await?;

    let stats = vocabulary.stats();
    ui_tx
        .send(AppEvent::StatusUpdate(format!(
            "{} words, {} lookups total",
            stats.total_words, stats.total_lookups
        )))
        .await?;

    Ok(())
}
