use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use docreader_ai::AiGateway;
use docreader_core::index::DictionaryIndex;
use docreader_core::loader::DictionaryLoader;
use docreader_core::lookup::LookupService;
use docreader_types::AppEvent;
use docreader_vocab::{FileStorage, Vocabulary};
use kanal::{AsyncReceiver, AsyncSender};

use crate::state::AppState;

pub mod ai_request;
pub mod lookup;
pub mod vocabulary;

use ai_request::handle_ai_request;
use lookup::{handle_search_contains, handle_search_prefix, handle_text_selected};
use vocabulary::{handle_list_vocabulary, handle_remove_word, handle_save_word};

/// App's main loop. Constructs the lookup service, the vocabulary store,
/// and the AI gateway once, then owns them for the process lifetime.
pub async fn event_loop(
    state: Arc<AppState>,
    input_rx: AsyncReceiver<AppEvent>,
    ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (mut lookup, mut vocabulary, assistant) = {
        let config = state.config.read().await;

        let index = if config.dictionary.enabled {
            load_index(config.dictionary.path.as_deref())
        } else {
            tracing::warn!("Dictionary disabled, every lookup will miss");
            DictionaryIndex::new()
        };
        let lookup = LookupService::with_cache_capacity(index, config.dictionary.cache_capacity);

        let vocabulary = Vocabulary::open(Box::new(FileStorage::new(
            config.vocabulary.storage_path.clone(),
        )));

        let assistant = if config.ai.enabled {
            Some(AiGateway::new(
                config.ai.base_url.clone(),
                Duration::from_secs(config.ai.probe_cooldown_secs),
                Duration::from_secs(config.ai.request_timeout_secs),
            ))
        } else {
            None
        };

        (lookup, vocabulary, assistant)
    };

    let stats = lookup.stats();
    tracing::info!(
        "Event loop started: {} dictionary entries, {} saved words",
        stats.total_entries,
        vocabulary.len()
    );

    while let Ok(event) = input_rx.recv().await {
        let result = match event {
            AppEvent::TextSelected { text, .. } => {
                handle_text_selected(&text, &mut lookup, &vocabulary, &ui_tx).await
            }
            AppEvent::SearchPrefix(prefix) => {
                handle_search_prefix(&prefix, &lookup, &vocabulary, &ui_tx).await
            }
            AppEvent::SearchContains(substring) => {
                handle_search_contains(&substring, &lookup, &vocabulary, &ui_tx).await
            }
            AppEvent::SaveWord { word, definition } => {
                handle_save_word(&word, definition, &mut lookup, &mut vocabulary, &ui_tx).await
            }
            AppEvent::RemoveWord(word) => {
                handle_remove_word(&word, &mut vocabulary, &ui_tx).await
            }
            AppEvent::ListVocabulary => handle_list_vocabulary(&vocabulary, &ui_tx).await,
            AppEvent::AiRequest(request) => {
                handle_ai_request(request, assistant.as_ref(), &ui_tx).await
            }
            // UI-bound events are not ours to handle
            AppEvent::ShowResults(_) | AppEvent::StatusUpdate(_) => Ok(()),
        };

        if let Err(e) = result {
            tracing::error!("Event handling failed: {e}");
        }
    }

    Ok(())
}

/// Dictionary load failures degrade, they never abort the app
fn load_index(path: Option<&str>) -> DictionaryIndex {
    let loaded = match path {
        Some(path) => DictionaryLoader::load_from_file(Path::new(path)).or_else(|e| {
            tracing::warn!("Failed to load dictionary from {path}: {e}; using embedded data");
            DictionaryLoader::load_embedded()
        }),
        None => DictionaryLoader::load_embedded(),
    };

    loaded.unwrap_or_else(|e| {
        tracing::error!("Failed to load any dictionary: {e}");
        DictionaryIndex::new()
    })
}
