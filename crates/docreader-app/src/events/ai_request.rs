use docreader_ai::{
    AiGateway, Assistant, GatewayReply, QuestionOptions, SummaryOptions, TranslateOptions,
};
use docreader_types::{AiRequest, AppEvent};
use kanal::AsyncSender;

pub async fn handle_ai_request(
    request: AiRequest,
    assistant: Option<&AiGateway>,
    ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(assistant) = assistant else {
        ui_tx
            .send(AppEvent::StatusUpdate("AI assistance disabled".to_string()))
            .await?;
        return Ok(());
    };

    let message = match request {
        AiRequest::Summarize { content } => {
            let reply = assistant
                .summarize(&content, SummaryOptions::default())
                .await;
            render(&reply, format!("Summary: {}", reply.result.summary))
        }
        AiRequest::Ask { content, question } => {
            let reply = assistant
                .answer(&content, &question, QuestionOptions::default())
                .await;
            render(&reply, format!("Answer: {}", reply.result.answer))
        }
        AiRequest::Translate {
            text,
            target_language,
        } => {
            let reply = assistant
                .translate(
                    &text,
                    TranslateOptions {
                        target_language,
                        ..TranslateOptions::default()
                    },
                )
                .await;
            render(&reply, format!("Translation: {}", reply.result.translated_text))
        }
        AiRequest::Analyze { content } => {
            let reply = assistant.analyze(&content).await;
            let analysis = &reply.result;
            render(
                &reply,
                format!(
                    "Analysis: {} words, {} sentences, {} paragraphs, ~{} min read, {}",
                    analysis.word_count,
                    analysis.sentence_count,
                    analysis.paragraph_count,
                    analysis.reading_time_minutes,
                    analysis.complexity_level
                ),
            )
        }
    };

    ui_tx.send(AppEvent::StatusUpdate(message)).await?;

    Ok(())
}

fn render<T>(reply: &GatewayReply<T>, body: String) -> String {
    match (&reply.error, reply.is_demo()) {
        (Some(error), _) => {
            tracing::warn!("AI request served by fallback: {error}");
            format!("[demo fallback] {body}")
        }
        (None, true) => format!("[demo] {body}"),
        (None, false) => body,
    }
}
