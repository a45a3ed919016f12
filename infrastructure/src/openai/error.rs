//! Error types for the OpenAI-compatible adapter

use thinker_application::GatewayError;
use thiserror::Error;

/// Result type alias for OpenAI adapter operations
pub type Result<T> = std::result::Result<T, OpenAiError>;

/// Errors that can occur when calling a chat completion endpoint
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("HTTP transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Request timeout")]
    Timeout,

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for OpenAiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            OpenAiError::Timeout
        } else {
            OpenAiError::Transport(e)
        }
    }
}

impl From<OpenAiError> for GatewayError {
    fn from(e: OpenAiError) -> Self {
        match e {
            OpenAiError::Transport(e) => GatewayError::ConnectionError(e.to_string()),
            OpenAiError::Timeout => GatewayError::Timeout,
            OpenAiError::Api { status, body } => GatewayError::RequestFailed { status, body },
            OpenAiError::ParseError(message) => GatewayError::InvalidResponse(message),
        }
    }
}
