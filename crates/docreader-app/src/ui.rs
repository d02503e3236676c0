use docreader_types::AppEvent;
use kanal::AsyncReceiver;

/// Drains app-to-ui events and prints them. Stands where a real screen
/// layer would render.
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    while let Ok(event) = app_to_ui_rx.recv().await {
        match event {
            AppEvent::ShowResults(results) => {
                for result in results {
                    let saved = if result.saved { " [saved]" } else { "" };
                    let count = result
                        .lookup_count
                        .map(|c| format!(" (x{c})"))
                        .unwrap_or_default();
                    println!("{}{saved}{count} - {}", result.word, result.definition);
                }
            }
            AppEvent::StatusUpdate(message) => println!("{message}"),
            _ => {}
        }
    }

    Ok(())
}
