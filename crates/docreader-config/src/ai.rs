use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_base_url() -> String {
    "http://localhost:5000/api/ai".to_string()
}

fn default_probe_cooldown_secs() -> u64 {
    60
}

fn default_request_timeout_secs() -> u64 {
    10
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AiConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// How long a health probe result is trusted before re-checking
    #[serde(default = "default_probe_cooldown_secs")]
    pub probe_cooldown_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl AiConfig {
    pub fn new() -> Self {
        let base_url = env::var("AI_BASE_URL").unwrap_or_else(|_| default_base_url());

        let probe_cooldown_secs = env::var("AI_PROBE_COOLDOWN_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_probe_cooldown_secs);

        let request_timeout_secs = env::var("AI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_request_timeout_secs);

        Self {
            enabled: default_enabled(),
            base_url,
            probe_cooldown_secs,
            request_timeout_secs,
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            base_url: default_base_url(),
            probe_cooldown_secs: default_probe_cooldown_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}
