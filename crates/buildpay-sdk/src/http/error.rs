/*
[INPUT]:  Error sources (configuration, HTTP transport, API responses, serde)
[OUTPUT]: Structured error types distinguishable by kind
[POS]:    Error handling layer - unified error types for the entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the BuildPay SDK.
#[derive(Error, Debug)]
pub enum BuildPayError {
    /// Required configuration missing or invalid, raised at construction
    #[error("configuration error: {0}")]
    Config(String),

    /// The server responded with a non-2xx status
    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        /// Decoded error body, when the server sent one
        body: Option<serde_json::Value>,
    },

    /// No response received (connection failure or timeout)
    #[error("no response received from the server: {0}")]
    Network(#[from] reqwest::Error),

    /// Request body could not be serialized or response body parsed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Request URL could not be constructed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl BuildPayError {
    /// HTTP status code, present only for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            BuildPayError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-supplied message, present only for API errors.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            BuildPayError::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// True when the failure happened before any response arrived.
    pub fn is_network(&self) -> bool {
        matches!(self, BuildPayError::Network(_))
    }

    pub fn is_api_error(&self) -> bool {
        matches!(self, BuildPayError::Api { .. })
    }
}

/// Result type alias for BuildPay operations.
pub type Result<T> = std::result::Result<T, BuildPayError>;
