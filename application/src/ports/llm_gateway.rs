//! LLM Gateway port
//!
//! Defines the interface for communicating with a chat-completion provider.

use async_trait::async_trait;
use thinker_domain::{CompletionRequest, Credential};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The provider answered with a non-success status.
    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// True when the provider rejected the request outright (4xx/5xx).
    pub fn is_rejection(&self) -> bool {
        matches!(self, GatewayError::RequestFailed { .. })
    }

    /// Short machine-readable kind for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::ConnectionError(_) => "connection",
            GatewayError::RequestFailed { .. } => "request_failed",
            GatewayError::InvalidResponse(_) => "invalid_response",
            GatewayError::Timeout => "timeout",
            GatewayError::Other(_) => "other",
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with the
/// completion provider. Implementations (adapters) live in the
/// infrastructure layer. The credential is passed per call; the gateway
/// never stores it.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send one completion request and return the first choice's content.
    ///
    /// An empty string means the provider answered without content.
    async fn complete(
        &self,
        request: &CompletionRequest,
        credential: &Credential,
    ) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_kind() {
        let err = GatewayError::RequestFailed {
            status: 401,
            body: "unauthorized".into(),
        };
        assert!(err.is_rejection());
        assert_eq!(err.kind(), "request_failed");
        assert!(err.to_string().contains("401"));
        assert!(!GatewayError::Timeout.is_rejection());
    }
}
