// Configuration for the gateway client
//
// Endpoint, model and timeout are injected through this struct rather than
// read from module constants, so tests can point the client at a local mock
// server.

use std::time::Duration;

/// Default gateway address for a locally running Llama Stack server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8321";

/// Default model identifier as registered on the gateway.
pub const DEFAULT_MODEL: &str = "openai/gpt-4o";

/// Default upstream target the gateway forwards credentials to.
pub const DEFAULT_PASSTHROUGH_URL: &str = "https://api.openai.com";

/// Configuration for [`LlamaStackClient`](crate::LlamaStackClient)
#[derive(Debug, Clone)]
pub struct LlamaStackConfig {
    /// Gateway base URL, e.g. "http://localhost:8321"
    pub base_url: String,
    /// Model used when a request does not name one
    pub model: String,
    /// Upstream URL placed in the provider-data header
    pub passthrough_url: String,
    /// Per-call timeout covering the whole request
    pub timeout: Duration,
}

impl Default for LlamaStackConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            passthrough_url: DEFAULT_PASSTHROUGH_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl LlamaStackConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_passthrough_url(mut self, url: impl Into<String>) -> Self {
        self.passthrough_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL with any trailing slash removed, ready for path joining.
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
