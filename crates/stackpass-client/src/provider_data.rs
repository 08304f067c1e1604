// Per-request credential header for the remote::passthrough provider

use reqwest::header::HeaderValue;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Header the gateway reads passthrough credentials from.
pub const PROVIDER_DATA_HEADER: &str = "X-LlamaStack-Provider-Data";

/// Credential payload forwarded by the gateway to the upstream provider.
///
/// The gateway's validator requires both fields in every request, even when
/// the upstream URL is already set in the server config, so this struct can
/// only be built with both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderData {
    pub passthrough_url: String,
    pub passthrough_api_key: String,
}

impl ProviderData {
    /// Pair a caller-supplied API key with the upstream target.
    ///
    /// The key is carried unchanged; an empty key is passed through for the
    /// gateway to reject.
    pub fn new(passthrough_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            passthrough_url: passthrough_url.into(),
            passthrough_api_key: api_key.into(),
        }
    }

    /// JSON-encode the payload into a header value.
    pub fn header_value(&self) -> Result<HeaderValue> {
        let json = serde_json::to_string(self)?;
        Ok(HeaderValue::from_str(&json)?)
    }
}
