//! Client for a Llama Stack gateway running the `remote::passthrough` provider.
//!
//! With `remote::passthrough` the gateway stores no upstream API key in its
//! config; the caller supplies one per request via the
//! `X-LlamaStack-Provider-Data` header, and the gateway forwards it upstream.
//! The header must carry BOTH the upstream URL and the API key — the
//! gateway's validator rejects a header with only one of the two, even when
//! the URL is already configured server-side.
//!
//! The surface mirrors the OpenAI chat completions API: one non-streaming
//! call returning a full message, and one streaming call yielding content
//! deltas decoded from an SSE body.

pub mod client;
pub mod config;
pub mod error;
pub mod provider_data;
pub mod streaming;
pub mod types;

pub use client::{ChatClient, ChatRequest, ChatResponse, LlamaStackClient};
pub use config::LlamaStackConfig;
pub use error::{Error, Result};
pub use provider_data::{ProviderData, PROVIDER_DATA_HEADER};
pub use streaming::StreamEvent;
pub use types::Message;
