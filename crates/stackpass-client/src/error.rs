use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Non-success status from the gateway, with the body it returned.
    #[error("gateway returned {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// Connection, read or timeout failure below the HTTP layer.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body or stream frame did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Credential could not be encoded as an HTTP header value.
    #[error("invalid provider-data header: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}

impl Error {
    /// Status code for API errors, None for everything else.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
