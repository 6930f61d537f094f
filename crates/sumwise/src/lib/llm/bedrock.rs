use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::{Deserialize, Serialize};

use crate::{config::ModelConfig, error::ModelError, llm::invoker::ModelInvoker};

/// Chat-style model client for the Bedrock runtime `invoke` endpoint,
/// authenticated with a Bedrock API key.
#[derive(Clone)]
pub struct BedrockClient {
    client: ClientWithMiddleware,
    api_key: String,
    config: ModelConfig,
    base_url: String,
}

impl BedrockClient {
    pub fn new(api_key: impl Into<String>, config: ModelConfig) -> Result<Self, ModelError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(config.retry.min_backoff, config.retry.max_backoff)
            .build_with_max_retries(config.retry.max_retries);

        let client = ClientBuilder::new(http)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: config.endpoint(),
            config,
        })
    }

    fn invoke_url(&self) -> String {
        // model ids carry a `:` version suffix which must be escaped in the path
        let model_id = self.config.model_id.replace(':', "%3A");
        format!("{}/model/{}/invoke", self.base_url, model_id)
    }

    #[tracing::instrument(skip_all, fields(model_id = %self.config.model_id, max_tokens = max_tokens))]
    pub async fn send_invoke_request(
        &self,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<InvokeResponse, ModelError> {
        let body = InvokeRequest {
            messages: vec![InvokeMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens,
            temperature: self.config.temperature,
            top_p: self.config.top_p,
        };
        let body = serde_json::to_vec(&body)?;

        let resp = self
            .client
            .post(self.invoke_url())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .bearer_auth(&self.api_key)
            .body(body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(ModelError::Api { status, message });
        }

        let raw = resp.text().await?;
        serde_json::from_str::<InvokeResponse>(&raw).map_err(|e| {
            tracing::error!(error = %e, "Unexpected response format from model service");
            ModelError::MalformedResponse(e.to_string())
        })
    }
}

#[derive(Debug, Serialize)]
struct InvokeRequest<'a> {
    messages: Vec<InvokeMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Serialize)]
struct InvokeMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct InvokeResponse {
    #[serde(default)]
    pub choices: Vec<InvokeChoice>,
}

#[derive(Debug, Deserialize)]
pub struct InvokeChoice {
    #[serde(default)]
    pub index: u32,
    pub message: InvokeMessageResponse,
    #[serde(alias = "finish_reason")]
    pub stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct InvokeMessageResponse {
    pub role: Option<String>,
    pub content: Option<String>,
}

impl ModelInvoker for BedrockClient {
    fn model_id(&self) -> &str {
        &self.config.model_id
    }

    fn region(&self) -> Option<&str> {
        Some(&self.config.region)
    }

    fn is_available(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    async fn invoke(&self, prompt: &str, max_output_tokens: u32) -> Result<String, ModelError> {
        let response = self
            .send_invoke_request(prompt, max_output_tokens)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to invoke model"))?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ModelError::MalformedResponse("No choices in response".into()))?;

        if choice.stop_reason.as_deref() == Some("length") {
            tracing::warn!(max_output_tokens, "Model output hit the token budget");
            return Err(ModelError::OutputBudgetExceeded { max_output_tokens });
        }

        let content = choice
            .message
            .content
            .ok_or_else(|| ModelError::MalformedResponse("No content in response".into()))?;

        Ok(content.trim().to_string())
    }
}
