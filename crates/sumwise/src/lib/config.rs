use std::time::Duration;

/// Per-deployment model settings. Nothing here varies per request.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub model_id: String,
    pub temperature: f32,
    pub top_p: f32,
    pub region: String,
    /// Overrides the regional runtime endpoint, e.g. for a proxy or tests.
    pub endpoint: Option<String>,
    pub request_timeout: Duration,
    pub retry: RetryConfig,
}

impl ModelConfig {
    pub const DEFAULT_MODEL_ID: &str = "eu.mistral.pixtral-large-2502-v1:0";
    pub const DEFAULT_REGION: &str = "eu-central-1";

    pub fn endpoint(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://bedrock-runtime.{}.amazonaws.com", self.region),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_id: Self::DEFAULT_MODEL_ID.into(),
            temperature: 0.3,
            top_p: 0.9,
            region: Self::DEFAULT_REGION.into(),
            endpoint: None,
            request_timeout: Duration::from_secs(120),
            retry: RetryConfig::default(),
        }
    }
}

/// Bounded exponential backoff, applied to transient failures only
/// (connection errors, 5xx, 429).
#[derive(Debug, Clone, Copy)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub min_backoff: Duration,
    pub max_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            min_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(8),
        }
    }
}
