use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::Serialize;
use serde_json::json;

use crate::demo;
use crate::error::GatewayError;
use crate::types::{
    Analysis, Answer, GatewayReply, QuestionOptions, Summary, SummaryOptions, TranslateOptions,
    Translation,
};

/// Remote reachability, decided by a health probe and re-checked once the
/// last probe has aged past the cooldown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Unknown,
    Available,
    Unavailable,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    pub available: bool,
    pub base_url: String,
    pub mode: String,
}

/// Document assistance provider interface
#[async_trait::async_trait]
pub trait Assistant: Send + Sync {
    async fn summarize(&self, content: &str, options: SummaryOptions) -> GatewayReply<Summary>;

    async fn answer(
        &self,
        content: &str,
        question: &str,
        options: QuestionOptions,
    ) -> GatewayReply<Answer>;

    async fn translate(&self, text: &str, options: TranslateOptions) -> GatewayReply<Translation>;

    async fn analyze(&self, content: &str) -> GatewayReply<Analysis>;
}

struct ProbeState {
    availability: Availability,
    checked_at: Option<Instant>,
}

/// Adapter around the remote AI backend. Every feature call resolves to a
/// usable reply: live data when the service responds, a deterministic demo
/// result otherwise.
pub struct AiGateway {
    base_url: String,
    client: reqwest::Client,
    probe_cooldown: Duration,
    request_timeout: Duration,
    state: Mutex<ProbeState>,
}

impl AiGateway {
    pub fn new(base_url: String, probe_cooldown: Duration, request_timeout: Duration) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
            probe_cooldown,
            request_timeout,
            state: Mutex::new(ProbeState {
                availability: Availability::Unknown,
                checked_at: None,
            }),
        }
    }

    pub fn status(&self) -> ServiceStatus {
        let available = self.current_availability() == Availability::Available;
        ServiceStatus {
            available,
            base_url: self.base_url.clone(),
            mode: if available { "live" } else { "demo" }.to_string(),
        }
    }

    pub fn current_availability(&self) -> Availability {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.availability
    }

    /// Probe the health endpoint when the cached result is unknown or stale
    pub async fn ensure_availability(&self) -> Availability {
        let needs_probe = {
            let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            match (state.availability, state.checked_at) {
                (Availability::Unknown, _) | (_, None) => true,
                (_, Some(checked_at)) => checked_at.elapsed() >= self.probe_cooldown,
            }
        };

        if needs_probe {
            self.probe().await
        } else {
            self.current_availability()
        }
    }

    async fn probe(&self) -> Availability {
        let url = format!("{}/health", self.base_url);
        let availability = match self
            .client
            .get(&url)
            .timeout(self.request_timeout)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => Availability::Available,
            Ok(response) => {
                tracing::warn!("AI health check returned {}", response.status());
                Availability::Unavailable
            }
            Err(e) => {
                tracing::info!("AI service not available - using demo mode: {e}");
                Availability::Unavailable
            }
        };

        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.availability = availability;
        state.checked_at = Some(Instant::now());
        availability
    }

    async fn post_json<T>(&self, path: &str, body: serde_json::Value) -> Result<T, GatewayError>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .timeout(self.request_timeout)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GatewayError::Status(response.status()));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait::async_trait]
impl Assistant for AiGateway {
    async fn summarize(&self, content: &str, options: SummaryOptions) -> GatewayReply<Summary> {
        if self.ensure_availability().await != Availability::Available {
            return GatewayReply::demo(demo::demo_summary(content, options.length));
        }

        let body = json!({
            "content": content,
            "length": options.length.as_str(),
            "max_words": options.max_words,
        });

        match self.post_json::<Summary>("summarize", body).await {
            Ok(summary) => GatewayReply::live(summary),
            Err(e) => {
                tracing::error!("Summarization error: {e}");
                GatewayReply::fallback(demo::demo_summary(content, options.length), e.to_string())
            }
        }
    }

    async fn answer(
        &self,
        content: &str,
        question: &str,
        options: QuestionOptions,
    ) -> GatewayReply<Answer> {
        if self.ensure_availability().await != Availability::Available {
            return GatewayReply::demo(demo::demo_answer(question));
        }

        let body = json!({
            "content": content,
            "question": question,
            "context_length": options.context_length,
        });

        match self.post_json::<Answer>("qa", body).await {
            Ok(answer) => GatewayReply::live(answer),
            Err(e) => {
                tracing::error!("Q&A error: {e}");
                GatewayReply::fallback(demo::demo_answer(question), e.to_string())
            }
        }
    }

    async fn translate(&self, text: &str, options: TranslateOptions) -> GatewayReply<Translation> {
        if self.ensure_availability().await != Availability::Available {
            return GatewayReply::demo(demo::demo_translation(text, &options.target_language));
        }

        let body = json!({
            "text": text,
            "source_language": options.source_language,
            "target_language": options.target_language,
        });

        match self.post_json::<Translation>("translate", body).await {
            Ok(translation) => GatewayReply::live(translation),
            Err(e) => {
                tracing::error!("Translation error: {e}");
                GatewayReply::fallback(
                    demo::demo_translation(text, &options.target_language),
                    e.to_string(),
                )
            }
        }
    }

    async fn analyze(&self, content: &str) -> GatewayReply<Analysis> {
        if self.ensure_availability().await != Availability::Available {
            return GatewayReply::demo(demo::demo_analysis(content));
        }

        let body = json!({ "content": content });

        // The backend wraps the analysis in an envelope
        #[derive(serde::Deserialize)]
        struct AnalyzeResponse {
            analysis: Analysis,
        }

        match self.post_json::<AnalyzeResponse>("analyze", body).await {
            Ok(response) => GatewayReply::live(response.analysis),
            Err(e) => {
                tracing::error!("Analysis error: {e}");
                GatewayReply::fallback(demo::demo_analysis(content), e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReplyMode;

    // Closed localhost port: the probe fails fast without leaving the machine
    fn unreachable_gateway() -> AiGateway {
        AiGateway::new(
            "http://127.0.0.1:9/api/ai".to_string(),
            Duration::from_secs(60),
            Duration::from_millis(500),
        )
    }

    #[tokio::test]
    async fn test_probe_failure_flips_to_unavailable() {
        let gateway = unreachable_gateway();
        assert_eq!(gateway.current_availability(), Availability::Unknown);

        let availability = gateway.ensure_availability().await;
        assert_eq!(availability, Availability::Unavailable);
        assert_eq!(gateway.current_availability(), Availability::Unavailable);

        let status = gateway.status();
        assert!(!status.available);
        assert_eq!(status.mode, "demo");
    }

    #[tokio::test]
    async fn test_cooldown_skips_reprobe() {
        let gateway = unreachable_gateway();
        gateway.ensure_availability().await;

        // Within the cooldown the cached verdict is reused
        let availability = gateway.ensure_availability().await;
        assert_eq!(availability, Availability::Unavailable);
    }

    #[tokio::test]
    async fn test_every_feature_call_falls_back_to_demo() {
        let gateway = unreachable_gateway();
        let content = "A sentence that is long enough to survive the filter. Another \
            sentence that also clears the length bar easily.";

        let summary = gateway.summarize(content, SummaryOptions::default()).await;
        assert_eq!(summary.mode, ReplyMode::Demo);
        assert!(!summary.result.summary.is_empty());

        let answer = gateway
            .answer(content, "What is this?", QuestionOptions::default())
            .await;
        assert_eq!(answer.mode, ReplyMode::Demo);
        assert!(!answer.result.answer.is_empty());

        let translation = gateway
            .translate("document", TranslateOptions::default())
            .await;
        assert_eq!(translation.mode, ReplyMode::Demo);
        assert!(translation.result.translated_text.contains("documento"));

        let analysis = gateway.analyze(content).await;
        assert_eq!(analysis.mode, ReplyMode::Demo);
        assert!(analysis.result.word_count > 0);
    }

    #[tokio::test]
    async fn test_zero_cooldown_reprobes() {
        let gateway = AiGateway::new(
            "http://127.0.0.1:9/api/ai".to_string(),
            Duration::ZERO,
            Duration::from_millis(500),
        );

        gateway.ensure_availability().await;
        let first_checked = {
            let state = gateway.state.lock().unwrap_or_else(|e| e.into_inner());
            state.checked_at
        };

        gateway.ensure_availability().await;
        let second_checked = {
            let state = gateway.state.lock().unwrap_or_else(|e| e.into_inner());
            state.checked_at
        };

        assert!(second_checked >= first_checked);
        assert_eq!(gateway.current_availability(), Availability::Unavailable);
    }
}
