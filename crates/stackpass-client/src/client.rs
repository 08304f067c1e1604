// Llama Stack gateway client (HTTP direct, no SDK)

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::LlamaStackConfig;
use crate::error::{Error, Result};
use crate::provider_data::{ProviderData, PROVIDER_DATA_HEADER};
use crate::streaming::{parse_chat_sse_stream, StreamEvent};
use crate::types::Message;

/// Chat interface against an OpenAI-compatible endpoint.
///
/// Credentials travel with each call rather than living in the client,
/// matching the gateway's passthrough contract.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Non-streaming chat completion
    async fn chat(&self, provider_data: &ProviderData, request: ChatRequest)
        -> Result<ChatResponse>;

    /// Streaming chat completion
    async fn chat_stream(
        &self,
        provider_data: &ProviderData,
        request: ChatRequest,
    ) -> Result<Pin<Box<dyn Stream<Item = Result<StreamEvent>> + Send>>>;
}

#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    /// Overrides the configured model when set
    pub model: Option<String>,
}

impl ChatRequest {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            model: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Client for the gateway's `/v1/chat/completions` endpoint.
pub struct LlamaStackClient {
    http_client: reqwest::Client,
    config: LlamaStackConfig,
}

impl LlamaStackClient {
    /// Create a client from configuration.
    ///
    /// The configured timeout bounds each call end to end, streaming reads
    /// included.
    pub fn new(config: LlamaStackConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Pair an API key with the configured upstream URL.
    pub fn provider_data(&self, api_key: impl Into<String>) -> ProviderData {
        ProviderData::new(self.config.passthrough_url.clone(), api_key)
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.config.trimmed_base_url())
    }

    fn build_chat_payload(&self, request: &ChatRequest, stream: bool) -> Value {
        let model = request.model.as_deref().unwrap_or(&self.config.model);

        let mut payload = serde_json::json!({
            "model": model,
            "messages": request.messages,
        });

        if stream {
            payload
                .as_object_mut()
                .expect("payload is an object")
                .insert("stream".to_string(), Value::Bool(true));
        }

        payload
    }

    async fn post_completions(
        &self,
        provider_data: &ProviderData,
        payload: &Value,
    ) -> Result<reqwest::Response> {
        let url = self.completions_url();
        tracing::debug!(%url, "sending chat completion request");

        let response = self
            .http_client
            .post(&url)
            .header(PROVIDER_DATA_HEADER, provider_data.header_value()?)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(%status, "gateway responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api { status, body });
        }

        Ok(response)
    }
}

#[async_trait]
impl ChatClient for LlamaStackClient {
    async fn chat(
        &self,
        provider_data: &ProviderData,
        request: ChatRequest,
    ) -> Result<ChatResponse> {
        let payload = self.build_chat_payload(&request, false);
        let response = self.post_completions(provider_data, &payload).await?;

        let body = response.text().await?;
        let parsed: ChatResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }

    async fn chat_stream(
        &self,
        provider_data: &ProviderData,
        request: ChatRequest,
    ) -> Result<Pin<Box<dyn Stream<Item = Result<StreamEvent>> + Send>>> {
        let payload = self.build_chat_payload(&request, true);
        let response = self.post_completions(provider_data, &payload).await?;

        Ok(parse_chat_sse_stream(response))
    }
}

// ============================================================================
// RESPONSE TYPES (non-streaming)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Content of the first choice. None when the gateway returned no
    /// choices or a content-less message.
    pub fn content(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.message.content.as_deref())
    }
}
